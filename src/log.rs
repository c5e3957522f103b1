pub mod targets {
    pub const RESOLUTION: &str = "resolution";
    pub const DPLL: &str = "dpll";
    pub const FORWARD: &str = "forward";
    pub const BACKWARD: &str = "backward";
}
