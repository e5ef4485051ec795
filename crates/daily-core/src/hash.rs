pub fn hash(input: &str) -> i32 {
    let mut acc: i32 = 0;
    // Iterate UTF-16 code units so surrogate pairs contribute two steps,
    // keeping the value identical to the historical JS `charCodeAt` loop.
    for unit in input.encode_utf16() {
        acc = acc
            .wrapping_shl(5)
            .wrapping_sub(acc)
            .wrapping_add(i32::from(unit));
    }
    acc
}

pub fn hash_hex(input: &str) -> String {
    format!("{:x}", hash(input).unsigned_abs())
}
