use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("capacity of {capacity} elements exceeded")]
pub struct CapacityExceeded {
    pub capacity: usize,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("operation requires a non-empty container")]
pub struct ContainerEmpty;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("key not found in container")]
pub struct KeyNotFound;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("capacity must be greater than zero")]
pub struct InvalidCapacity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "index {} out of bounds for collection with {} elements", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("edge from vertex {vertex} to itself is not allowed")]
pub struct SelfLoop {
    pub vertex: usize,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("adjacency matrix row {row} is not a row of {expected} zeros and ones")]
pub struct MalformedMatrix {
    pub row: usize,
    pub expected: usize,
}

/// An argument that no state of the container could accept.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error, From, TryInto, IsVariant)]
pub enum InvalidArgument {
    InvalidCapacity(InvalidCapacity),
    IndexOutOfBounds(IndexOutOfBounds),
    SelfLoop(SelfLoop),
    MalformedMatrix(MalformedMatrix),
}

/// Every error this crate produces, for callers that want to propagate them through one type.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error, From, TryInto, IsVariant)]
pub enum ContainerError {
    CapacityExceeded(CapacityExceeded),
    ContainerEmpty(ContainerEmpty),
    KeyNotFound(KeyNotFound),
    InvalidArgument(InvalidArgument),
}

impl From<InvalidCapacity> for ContainerError {
    fn from(value: InvalidCapacity) -> Self {
        InvalidArgument::from(value).into()
    }
}

impl From<IndexOutOfBounds> for ContainerError {
    fn from(value: IndexOutOfBounds) -> Self {
        InvalidArgument::from(value).into()
    }
}

impl From<SelfLoop> for ContainerError {
    fn from(value: SelfLoop) -> Self {
        InvalidArgument::from(value).into()
    }
}

impl From<MalformedMatrix> for ContainerError {
    fn from(value: MalformedMatrix) -> Self {
        InvalidArgument::from(value).into()
    }
}
