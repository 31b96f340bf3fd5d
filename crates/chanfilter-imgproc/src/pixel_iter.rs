use chanfilter_image::Image;

/// Apply a function to each pixel of `src`, writing the matching pixel of `dst`.
///
/// Precondition: both images have the same size.
pub fn iter_pixels<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    f: impl Fn(&[T1], &mut [T2]),
) {
    src.as_slice()
        .chunks_exact(C1)
        .zip(dst.as_slice_mut().chunks_exact_mut(C2))
        .for_each(|(src_pixel, dst_pixel)| {
            f(src_pixel, dst_pixel);
        });
}

/// Apply a function to each sample of two sources, writing the matching sample of `dst`.
///
/// Precondition: all three images have the same size.
pub fn iter_samples_two<T1, T2, T3, const C: usize>(
    src1: &Image<T1, C>,
    src2: &Image<T2, C>,
    dst: &mut Image<T3, C>,
    f: impl Fn(&T1, &T2, &mut T3),
) {
    src1.as_slice()
        .iter()
        .zip(src2.as_slice().iter())
        .zip(dst.as_slice_mut().iter_mut())
        .for_each(|((s1, s2), d)| {
            f(s1, s2, d);
        });
}
