//! CSF Encoding Example
//!
//! Encodes the example matrix from the TACO paper under all four per-axis
//! density-mode combinations and prints the resulting level encodings.
//!
//! Run with: cargo run --example taco_matrix

use sparso_core::DenseND;
use sparso_csf::{encode, CsfTensor, DensityMode};

fn main() -> anyhow::Result<()> {
    println!("=== SpaRSo CSF: TACO Paper Example ===\n");

    // | 6 0 9 8 |
    // | 0 0 0 0 |
    // | 5 0 0 7 |
    let tensor = DenseND::from_vec(
        vec![
            6.0f32, 0.0, 9.0, 8.0, //
            0.0, 0.0, 0.0, 0.0, //
            5.0, 0.0, 0.0, 7.0,
        ],
        &[3, 4],
    )?;

    let cases = [
        ("Sparse, Sparse", [DensityMode::Sparse, DensityMode::Sparse]),
        ("Dense,  Dense", [DensityMode::Dense, DensityMode::Dense]),
        ("Sparse, Dense", [DensityMode::Sparse, DensityMode::Dense]),
        ("Dense,  Sparse", [DensityMode::Dense, DensityMode::Sparse]),
    ];

    for (name, modes) in &cases {
        let csf = encode(&tensor, modes)?;
        println!("--- {name} ---");
        print_csf(&csf);
    }

    Ok(())
}

fn print_csf(csf: &CsfTensor<f32>) {
    for (axis, level) in csf.levels().iter().enumerate() {
        println!(
            "  level {axis} ({:?}): position = {:?}, index = {:?}",
            csf.modes()[axis],
            level.position,
            level.index
        );
    }
    println!(
        "  values = {:?}  ({} stored, density {:.1}%)\n",
        csf.values(),
        csf.nnz(),
        csf.density() * 100.0
    );
}
