use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{
    EMAIL_MAX_LEN, EMAIL_OFFSET, EMAIL_SIZE, ID_OFFSET, ID_SIZE, ROW_SIZE, USERNAME_MAX_LEN,
    USERNAME_OFFSET, USERNAME_SIZE,
    error::{DatabaseError, Result},
};

/// One record of the fixed schema: `id`, `username` (≤32 bytes),
/// `email` (≤255 bytes). Rows are immutable once inserted; there is no
/// update or delete operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub id: u32,
    pub username: String,
    pub email: String,
}

impl Row {
    pub fn new(id: u32, username: &str, email: &str) -> Result<Self> {
        check_len("username", username, USERNAME_MAX_LEN)?;
        check_len("email", email, EMAIL_MAX_LEN)?;
        Ok(Self {
            id,
            username: username.to_string(),
            email: email.to_string(),
        })
    }

    /// Encode this row into a `ROW_SIZE` slot: `id` little-endian at
    /// offset 0, `username` at 4, `email` at 37. Short strings are
    /// zero-padded to the end of their slot so the encoding is
    /// deterministic.
    pub fn serialize_into(&self, slot: &mut [u8]) -> Result<()> {
        if slot.len() != ROW_SIZE {
            return Err(DatabaseError::InvalidRowBuffer {
                expected: ROW_SIZE,
                actual: slot.len(),
            });
        }
        check_len("username", &self.username, USERNAME_MAX_LEN)?;
        check_len("email", &self.email, EMAIL_MAX_LEN)?;

        slot[ID_OFFSET..ID_OFFSET + ID_SIZE].copy_from_slice(&self.id.to_le_bytes());
        write_text(
            &mut slot[USERNAME_OFFSET..USERNAME_OFFSET + USERNAME_SIZE],
            &self.username,
        );
        write_text(&mut slot[EMAIL_OFFSET..EMAIL_OFFSET + EMAIL_SIZE], &self.email);
        Ok(())
    }

    /// Decode a row from a `ROW_SIZE` slot. Decode trusts the page
    /// content: string fields are read up to the first NUL and no
    /// semantic validation is performed.
    pub fn deserialize_from(slot: &[u8]) -> Result<Self> {
        if slot.len() != ROW_SIZE {
            return Err(DatabaseError::InvalidRowBuffer {
                expected: ROW_SIZE,
                actual: slot.len(),
            });
        }
        let id = u32::from_le_bytes([
            slot[ID_OFFSET],
            slot[ID_OFFSET + 1],
            slot[ID_OFFSET + 2],
            slot[ID_OFFSET + 3],
        ]);
        let username = read_text(&slot[USERNAME_OFFSET..USERNAME_OFFSET + USERNAME_SIZE]);
        let email = read_text(&slot[EMAIL_OFFSET..EMAIL_OFFSET + EMAIL_SIZE]);
        Ok(Self {
            id,
            username,
            email,
        })
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.id, self.username, self.email)
    }
}

fn check_len(column: &'static str, value: &str, max: usize) -> Result<()> {
    if value.len() > max {
        return Err(DatabaseError::ValueTooLong {
            column,
            length: value.len(),
            max,
        });
    }
    Ok(())
}

fn write_text(dest: &mut [u8], value: &str) {
    let bytes = value.as_bytes();
    dest[..bytes.len()].copy_from_slice(bytes);
    dest[bytes.len()..].fill(0);
}

fn read_text(src: &[u8]) -> String {
    let end = src.iter().position(|&b| b == 0).unwrap_or(src.len());
    String::from_utf8_lossy(&src[..end]).into_owned()
}
