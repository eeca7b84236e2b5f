/// Anything that can turn a name into a greeting.
///
/// Implemented by the library component and by the application service that
/// forwards to it, so callers can depend on the behavior instead of the
/// concrete bean.
pub trait Greeter: Send + Sync {
    fn hello(&self, name: &str) -> String;
}
