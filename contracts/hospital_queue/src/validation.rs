use common::clock::MAX_UTC_OFFSET_MINUTES;
use soroban_sdk::String;

use crate::{types::Vitals, ContractError};

const MIN_NAME_LEN: u32 = 2;
const MAX_NAME_LEN: u32 = 64;

const MAX_TEXT_LEN: u32 = 1024;

const MAX_PAIN_LEVEL: u32 = 10;
const MAX_SATURATION: u32 = 100;

/// Validate a person, department or queue name.
/// Names must be between MIN_NAME_LEN and MAX_NAME_LEN bytes and carry no
/// control characters. Bytes above 0x7F are accepted so accented UTF-8 names
/// ("João", "Clínica Médica") pass.
pub fn validate_name(name: &String) -> Result<(), ContractError> {
    let len = name.len();
    if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&len) {
        return Err(ContractError::InvalidInput);
    }

    let mut buf = [0u8; MAX_NAME_LEN as usize];
    name.copy_into_slice(&mut buf[..len as usize]);

    if buf[..len as usize].iter().any(|&b| b < 32 || b == 127) {
        return Err(ContractError::InvalidInput);
    }

    Ok(())
}

/// Free text (notes, descriptions, clinical fields) only has a size cap.
pub fn validate_text(text: &String) -> Result<(), ContractError> {
    if text.len() > MAX_TEXT_LEN {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}

/// Required free text: non-empty and within the size cap.
pub fn validate_required_text(text: &String) -> Result<(), ContractError> {
    if text.is_empty() {
        return Err(ContractError::InvalidInput);
    }
    validate_text(text)
}

/// Temperature, blood pressure and heart rate are mandatory; the remaining
/// readings may be zero (not measured) but must stay in range.
pub fn validate_vitals(vitals: &Vitals) -> Result<(), ContractError> {
    if vitals.temperature_dc == 0
        || vitals.systolic_mmhg == 0
        || vitals.diastolic_mmhg == 0
        || vitals.heart_rate == 0
    {
        return Err(ContractError::InvalidInput);
    }

    if vitals.pain_level > MAX_PAIN_LEVEL || vitals.oxygen_saturation > MAX_SATURATION {
        return Err(ContractError::InvalidInput);
    }

    Ok(())
}

/// A half-open `[from, to)` window; an empty window is allowed.
pub fn validate_period(from: u64, to: u64) -> Result<(), ContractError> {
    if from > to {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}

pub fn validate_utc_offset(utc_offset_minutes: i32) -> Result<(), ContractError> {
    if !(-MAX_UTC_OFFSET_MINUTES..=MAX_UTC_OFFSET_MINUTES).contains(&utc_offset_minutes) {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}
