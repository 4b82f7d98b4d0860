// rrhfoem-rs/rrhfoem/src/protocol/commands/system.rs

use crate::constants::{
    FAMILY_SYSTEM, SYS_BUZZER_BEEP, SYS_BUZZER_OFF, SYS_BUZZER_ON, SYS_READER_INFO,
};

/// Encode the reader-info query body (family + opcode, no parameters).
pub fn encode_reader_info() -> Vec<u8> {
    vec![FAMILY_SYSTEM, SYS_READER_INFO]
}

/// Encode a single buzzer beep.
pub fn encode_buzzer_beep() -> Vec<u8> {
    vec![FAMILY_SYSTEM, SYS_BUZZER_BEEP]
}

/// Encode buzzer on.
pub fn encode_buzzer_on() -> Vec<u8> {
    vec![FAMILY_SYSTEM, SYS_BUZZER_ON]
}

/// Encode buzzer off.
pub fn encode_buzzer_off() -> Vec<u8> {
    vec![FAMILY_SYSTEM, SYS_BUZZER_OFF]
}
