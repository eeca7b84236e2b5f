use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "greeting-wire")]
#[command(about = "Compose the greeting beans and print a greeting")]
pub struct CliConfig {
    /// Name to greet; falls back to [greeting] default_name
    pub name: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// 命令列參數優先於設定檔
    pub fn resolve_name<'a>(&'a self, fallback: Option<&'a str>) -> Option<&'a str> {
        self.name.as_deref().or(fallback)
    }
}
