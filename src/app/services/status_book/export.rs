//! JSON export of a community collection
//!
//! Output is a JSON array with one object per record. Absent dates are
//! written as `null`; every other field is always present.

use super::CommunityStatusCollection;
use crate::error::{Error, Result};
use std::io::{Read, Write};

impl CommunityStatusCollection {
    /// Write the collection as compact JSON followed by a newline
    pub fn to_json_writer<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer(&mut writer, self)?;
        writer
            .write_all(b"\n")
            .and_then(|()| writer.flush())
            .map_err(|e| Error::io("Failed to write JSON output", e))
    }

    /// Write the collection as indented JSON followed by a newline
    pub fn to_json_pretty_writer<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer
            .write_all(b"\n")
            .and_then(|()| writer.flush())
            .map_err(|e| Error::io("Failed to write JSON output", e))
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Read back a collection previously written by [`Self::to_json_writer`]
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}
