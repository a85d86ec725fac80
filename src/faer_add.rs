use faer::Mat;
use std::io::{self, Write};

/// Scalar type used by every solver in this crate.
pub type Float = f64;

pub fn write_mat_to_buffer(
    m: &Mat<Float>,
    output: &mut io::BufWriter<impl Write>,
) -> io::Result<()> {
    for i in 0..m.nrows() {
        writeln!(
            output,
            "{}",
            (0..m.ncols())
                .map(|j| m[(i, j)].to_string())
                .collect::<Vec<_>>()
                .join(",")
        )?;
    }

    Ok(())
}
