use crate::hash::hash;
use crate::identity::IdentityProvider;
use time::{OffsetDateTime, UtcOffset};

pub fn current_date_key() -> String {
    date_key(now_local())
}

pub fn date_key(moment: OffsetDateTime) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        moment.year(),
        u8::from(moment.month()),
        moment.day()
    )
}

pub fn is_date_key(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 10 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    })
}

pub fn daily_id(identity: &str, date_key: &str, range: u32) -> u32 {
    let seed = format!("{date_key}-{identity}");
    hash(&seed).unsigned_abs() % range + 1
}

pub fn todays_id(identity: &IdentityProvider, range: u32) -> u32 {
    daily_id(&identity.user_id(), &current_date_key(), range)
}

// The selection must roll over at local midnight. When the platform
// refuses to disclose the local offset, UTC is the closest total fallback.
fn now_local() -> OffsetDateTime {
    let utc = OffsetDateTime::now_utc();
    match UtcOffset::current_local_offset() {
        Ok(offset) => utc.to_offset(offset),
        Err(_) => utc,
    }
}
