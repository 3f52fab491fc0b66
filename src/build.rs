use anyhow::Error as Anyhow;

/// Trait for types that encode the runtime configuration of some component.
pub trait Build {
    /// The type this configuration sets up.
    type Output;

    /// Consumes this configuration to set up [`Build::Output`].
    fn build(self) -> Result<Self::Output, Anyhow>;
}
