pub struct Config {
    /// Only report warnings and errors.
    pub quiet: bool,
    /// Address the API server binds to.
    ///
    /// Decides which address family leads the service CIDR argument in
    /// dual-stack clusters.
    pub bind_address: String,
}
