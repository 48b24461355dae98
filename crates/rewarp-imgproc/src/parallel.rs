use rayon::prelude::*;

use rewarp_image::{PixelBuffer, SampleType};

/// Apply a function to each destination pixel in parallel, by rows.
///
/// The destination is split into exact row chunks so each Rayon worker owns a
/// disjoint row range; the closure receives the pixel coordinate and a
/// mutable slice over that pixel's channel samples. Iteration order never
/// affects the output since every write target is disjoint.
pub fn par_iter_rows_indexed<T: SampleType, const C: usize>(
    dst: &mut PixelBuffer<T, C>,
    f: impl Fn(usize, usize, &mut [T]) + Send + Sync,
) {
    let cols = dst.cols();
    if cols == 0 {
        return;
    }
    dst.as_slice_mut()
        .par_chunks_exact_mut(C * cols)
        .enumerate()
        .for_each(|(y, dst_row)| {
            dst_row
                .chunks_exact_mut(C)
                .enumerate()
                .for_each(|(x, dst_pixel)| {
                    f(x, y, dst_pixel);
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewarp_image::{ImageError, ImageSize};

    #[test]
    fn visits_every_pixel_once() -> Result<(), ImageError> {
        let mut dst = PixelBuffer::<f32, 2>::from_size_val(
            ImageSize {
                width: 3,
                height: 4,
            },
            0.0,
        )?;

        par_iter_rows_indexed(&mut dst, |x, y, pixel| {
            pixel[0] = x as f32;
            pixel[1] = y as f32;
        });

        for y in 0..4 {
            for x in 0..3 {
                assert_eq!(dst.get_pixel(x, y)?, [x as f32, y as f32]);
            }
        }
        Ok(())
    }
}
