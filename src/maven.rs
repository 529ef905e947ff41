pub mod coordinates;

/// Dependency scopes as Maven names them
pub mod scopes {
    pub const COMPILE: &str = "compile";
    pub const PROVIDED: &str = "provided";
    pub const RUNTIME: &str = "runtime";
    pub const TEST: &str = "test";
    pub const SYSTEM: &str = "system";
}
