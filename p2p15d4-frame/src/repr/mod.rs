//! High-level representations of frame fields.

mod addressing;
pub use addressing::AddressingFieldsRepr;

mod frame_control;
pub use frame_control::FrameControlRepr;

mod data;
pub use data::{DataFrameRepr, DataHeaderRepr};

mod builder;
pub use builder::{Data2003, Data2015, FrameBuilder};

mod report;
pub use report::{FrameBody, FrameContent, FrameReport, HexDump};
