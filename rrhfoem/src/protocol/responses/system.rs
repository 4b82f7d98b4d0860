// rrhfoem-rs/rrhfoem/src/protocol/responses/system.rs

use crate::constants::{
    PAYLOAD_OFFSET, READER_INFO_DELIMITER, READER_INFO_LEN, READER_INFO_SERIAL_LEN,
};
use crate::protocol::ResponseFrame;
use crate::types::ReaderInfo;
use crate::utils::bytes_to_hex;
use crate::{Error, Result};

/// Decode the reader-info payload: 16 bytes at offset 5, an ASCII model
/// string terminated by `-`, serial number in the trailing 3 bytes.
pub fn decode_reader_info(frame: &ResponseFrame) -> Result<ReaderInfo> {
    let info = frame.slice_at(PAYLOAD_OFFSET, READER_INFO_LEN)?;

    let delim = info
        .iter()
        .position(|&b| b == READER_INFO_DELIMITER)
        .ok_or_else(|| Error::MalformedResponse("reader info delimiter missing".to_string()))?;

    let model = std::str::from_utf8(&info[..delim])
        .map_err(|_| Error::MalformedResponse("reader model is not ASCII".to_string()))?
        .to_string();

    let serial = bytes_to_hex(&info[READER_INFO_LEN - READER_INFO_SERIAL_LEN..]);

    Ok(ReaderInfo { model, serial })
}
