use std::io::Write;

use itertools::Itertools;
use shardkey::{
    verify_bijection, BitPrefixEncoder, KeyEncoder, KeyError, KeyResult, KeyWord, Uuid,
    UuidEncoder,
};

use crate::DemoResult;

/// Parse decimal or `0x`-prefixed hex, rejecting keys wider than `W`.
pub fn parse_key<W: KeyWord>(s: &str) -> KeyResult<W> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u128::from_str_radix(&hex.replace('_', ""), 16),
        None => s.replace('_', "").parse::<u128>(),
    };
    parsed
        .ok()
        .and_then(W::from_u128)
        .ok_or_else(|| KeyError::InvalidKey(format!("{s:?} is not a {}-bit key", W::BITS)))
}

/// Keys around the field boundary and the ends of the word, deduplicated and sorted.
pub fn sample_keys<W: KeyWord>(offset: u32) -> Vec<W> {
    let max = W::MAX.as_u128();
    let step = 1u128.checked_shl(offset);
    let around = |base: Option<u128>| {
        [
            base.and_then(|b| b.checked_sub(1)),
            base,
            base.and_then(|b| b.checked_add(1)),
        ]
    };

    let mut seq: Vec<Option<u128>> = [0, 1, 2, 3, 4, 127, 128, 129, 255, 256, 1023, 1024]
        .into_iter()
        .map(Some)
        .collect();
    for k in 1..33u128 {
        seq.extend(around(step.and_then(|s| s.checked_mul(k))));
    }
    seq.extend(around(step.and_then(|s| max.checked_sub(s))));
    seq.extend(around(Some(1 << 31)));
    seq.extend(around(Some(u32::MAX as u128)));
    seq.extend(around(Some(0x0123_4567_89AB_CDEF)));
    seq.extend([max.checked_sub(1), Some(max)]);

    seq.into_iter()
        .flatten()
        .filter_map(W::from_u128)
        .sorted()
        .dedup()
        .collect()
}

pub fn keys_or_sample<W: KeyWord>(values: &[String], offset: u32) -> KeyResult<Vec<W>> {
    if values.is_empty() {
        return Ok(sample_keys(offset));
    }
    values.iter().map(|v| parse_key(v)).collect()
}

pub fn uuids_or_sample(uuids: &[String]) -> KeyResult<Vec<Uuid>> {
    if uuids.is_empty() {
        let mut sample = vec![
            Uuid::nil(),
            Uuid::from_u128(0x018f_14e0_8f0a_7def_91b4_f0ec_b69f_5f01),
            Uuid::from_u128(0x0156_3df3_6481_d676_4c61_efb9_9302_bd5b),
            Uuid::from_u128(u128::MAX),
        ];
        sample.extend((0..4).map(|_| Uuid::new_v4()));
        return Ok(sample);
    }
    uuids
        .iter()
        .map(|u| Uuid::parse_str(u.trim()).map_err(|e| KeyError::InvalidKey(format!("{u:?}: {e}"))))
        .collect()
}

/// Hex cell for a prefix; a zero-width prefix has no digits.
fn prefix_hex(prefix: u128, digits: usize) -> String {
    match digits {
        0 => String::new(),
        _ => format!("{prefix:0digits$x}"),
    }
}

/// Binary cell for a prefix; a zero-width prefix has no bits.
fn prefix_bin(prefix: u128, bits: usize) -> String {
    match bits {
        0 => String::new(),
        _ => format!("{prefix:0bits$b}"),
    }
}

fn print_layout<E: KeyEncoder>(out: &mut impl Write, enc: &E) -> DemoResult<()> {
    writeln!(out, "mask offset:\t{}", enc.right_size())?;
    writeln!(out, "mask size:\t{}", enc.prefix_size())?;
    writeln!(out, "hex nibbles:\t{}", enc.prefix_hex_size())?;
    Ok(())
}

pub fn print_table32(
    out: &mut impl Write,
    enc: &BitPrefixEncoder<u32>,
    values: &[u32],
) -> DemoResult<()> {
    print_layout(out, enc)?;
    verify_bijection(enc, values.iter().copied())?;

    let hex_digits = enc.prefix_hex_size() as usize;
    let pre_bits = enc.prefix_size() as usize;
    let pre_width = hex_digits.max("prefix(hex)".len());
    let pre_bin_width = pre_bits.max("prefix(bin)".len());

    writeln!(
        out,
        "{:>10}   {:>9}   {:>32}   {:>8}   {:>32}   {:>pre_width$}   {:>pre_bin_width$}",
        "orig(dec)", "orig(hex)", "orig(bin)", "enc(hex)", "enc(bin)", "prefix(hex)", "prefix(bin)",
    )?;
    for &orig in values {
        let encoded = enc.encode(orig);
        let prefix = enc.prefix(encoded);
        writeln!(
            out,
            "{:>10}   {:>9}   {:>32}   {:>8}   {:>32}   {:>pre_width$}   {:>pre_bin_width$}",
            orig,
            format!("{orig:08x}"),
            format!("{orig:032b}"),
            format!("{encoded:08x}"),
            format!("{encoded:032b}"),
            prefix_hex(enc.prefix_hex_pad(prefix).as_u128(), hex_digits),
            prefix_bin(prefix.as_u128(), pre_bits),
        )?;
    }
    Ok(())
}

pub fn print_table64(
    out: &mut impl Write,
    enc: &BitPrefixEncoder<u64>,
    values: &[u64],
) -> DemoResult<()> {
    print_layout(out, enc)?;
    verify_bijection(enc, values.iter().copied())?;

    let hex_digits = enc.prefix_hex_size() as usize;
    let pre_bits = enc.prefix_size() as usize;
    let separator = format!("{:-<7}   {:-<20}   {:-<16}   {:-<64}", "", "", "", "");

    writeln!(out, "{:<7}   {:<20}   {:<16}   {:<64}", "Input", "Decimal", "Hex", "Binary")?;
    writeln!(out, "{separator}")?;
    for &orig in values {
        let encoded = enc.encode(orig);
        let prefix = enc.prefix(encoded);

        writeln!(out, "{:<7}   {:>20}   {:016x}   {:064b}", "orig", orig, orig, orig)?;
        writeln!(
            out,
            "{:<7}   {:>20}   {:016x}   {:064b}",
            "encoded", encoded, encoded, encoded
        )?;
        writeln!(
            out,
            "{:<7}   {:>20}   {:<16}   {:<64}",
            "prefix",
            prefix,
            prefix_hex(enc.prefix_hex_pad(prefix).as_u128(), hex_digits),
            prefix_bin(prefix.as_u128(), pre_bits),
        )?;
        writeln!(out, "{separator}")?;
    }
    Ok(())
}

pub fn print_uuid_table(
    out: &mut impl Write,
    enc: &UuidEncoder,
    uuids: &[Uuid],
) -> DemoResult<()> {
    writeln!(out, "window bits:\t{}", enc.window_bits())?;
    print_layout(out, enc)?;
    verify_bijection(enc, uuids.iter().copied())?;

    let hex_digits = enc.prefix_hex_size() as usize;
    writeln!(out, "{:<36}   {:<36}   {}", "orig", "encoded", "prefix(hex)")?;
    for &orig in uuids {
        let encoded = enc.encode(orig);
        let prefix = enc.prefix_hex_pad(enc.prefix_bits(encoded));
        writeln!(
            out,
            "{:<36}   {:<36}   {}",
            orig.hyphenated(),
            encoded.into_inner().hyphenated(),
            prefix_hex(prefix, hex_digits)
        )?;
    }
    Ok(())
}
