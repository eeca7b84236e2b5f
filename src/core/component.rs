use crate::domain::ports::Greeter;

/// Stateless library component: prefixes a name with `"Hello "`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreetingComponent;

impl GreetingComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn hello(&self, name: &str) -> String {
        let res = format!("Hello {}", name);
        tracing::info!("{}", res);
        res
    }
}

impl Greeter for GreetingComponent {
    fn hello(&self, name: &str) -> String {
        GreetingComponent::hello(self, name)
    }
}
