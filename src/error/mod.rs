use thiserror::Error;

/// Custom error type for circuit-table operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Error for an unsupported qubit count.
    #[error("Unsupported number of qubits: {0}.")]
    InvalidNumQubits(usize),
    /// Error for an invalid qubit index.
    #[error("Qubit index {0} is out of bounds for {1} qubits.")]
    QubitIndexOutOfBounds(usize, usize),
    /// Error for a two-qubit operation addressing one qubit twice.
    #[error("Control and target qubits must differ, got {0}.")]
    DuplicateQubitIndices(usize),
    /// Error for externally supplied rows that violate the symplectic form.
    #[error("Rows do not satisfy the symplectic form.")]
    NotSymplectic,
    /// Error for a generator index outside the canonical generator list.
    #[error("Generator index {0} is out of bounds for {1} generators.")]
    GeneratorIndexOutOfBounds(usize, usize),
    /// Error for malformed serialized table data.
    #[error("Corrupt circuit table: {0}.")]
    CorruptTable(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
