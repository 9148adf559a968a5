use std::{io::Write, time::Instant};

use rayon::prelude::*;
use shardkey::{verify_bijection, Key32Encoder, KeyEncoder, KeyResult};

use crate::DemoResult;

const CHUNK_BITS: u32 = 16;

/// Round-trip every key in `[lo_chunk << 16, hi_chunk << 16 | 0xffff]`.
pub fn verify_chunks(enc: &Key32Encoder, lo_chunk: u32, hi_chunk: u32) -> KeyResult<usize> {
    (lo_chunk..=hi_chunk)
        .into_par_iter()
        .map(|chunk| {
            let start = chunk << CHUNK_BITS;
            let end = start | ((1 << CHUNK_BITS) - 1);
            verify_bijection(enc, start..=end)
        })
        .try_reduce(|| 0, |a, b| Ok(a + b))
}

/// Round-trip all 2^32 keys; a round-trip on the whole domain makes the
/// encoder a permutation of it.
pub fn verify_all_u32(out: &mut impl Write, enc: &Key32Encoder) -> DemoResult<()> {
    log::info!(
        "verifying offset {} size {} over all 32-bit keys",
        enc.right_size(),
        enc.prefix_size()
    );
    let start_time = Instant::now();

    let checked = verify_chunks(enc, 0, u32::MAX >> CHUNK_BITS)?;

    let elapsed = start_time.elapsed();
    log::info!("verified {} keys in {:.2?}", checked, elapsed);
    writeln!(
        out,
        "offset {} size {}: {} keys round-trip ({:.2?})",
        enc.right_size(),
        enc.prefix_size(),
        checked,
        elapsed
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_chunks() {
        let enc = Key32Encoder::new(11, 13).unwrap();
        assert_eq!(verify_chunks(&enc, 0, 3), Ok(4 << CHUNK_BITS));

        let top = u32::MAX >> CHUNK_BITS;
        assert_eq!(verify_chunks(&enc, top - 1, top), Ok(2 << CHUNK_BITS));
    }
}
