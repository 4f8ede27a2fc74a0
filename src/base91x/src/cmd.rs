pub mod decode;
pub mod encode;
pub mod perf;

/// Represents a command in the base91x application.
pub trait Command {
    /// Consumes a command object and executes the handler actions
    /// associated with it.
    ///
    /// On failure, an error will be reported.
    fn handle(self) -> eyre::Result<()>;
}
