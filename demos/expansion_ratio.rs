//! Recover a geometric expansion ratio from a target first-cell width,
//! then mesh with it.
//!
//! Run with: `cargo run --example expansion_ratio`

use fvmesh::{Discretization, ExpansionRatioSolver, GeometrySpec, build};

fn main() {
    let (x_start, x_end) = (0.0, 1.0);
    let n_volumes = 6;
    // Ask for a first cell roughly twice as wide as the uniform width, so
    // the mesh has to contract towards the right boundary.
    let h_first = 0.3;

    println!("Expansion Ratio Solver");
    println!("======================");
    println!("Domain: [{}, {}]", x_start, x_end);
    println!("Volumes: {}", n_volumes);
    println!("Target first-cell width: {}", h_first);
    println!();

    let solver = ExpansionRatioSolver {
        // Contracting target: start the iteration below 1
        initial_guess: 0.9,
        ..Default::default()
    };
    let solve = solver.solve(n_volumes, x_start, x_end, h_first);

    println!("alpha      = {:.10}", solve.alpha);
    println!("residual   = {:.3e}", solve.residual);
    println!("iterations = {}", solve.iterations);
    println!("converged  = {}", solve.converged);

    if !solve.converged {
        eprintln!("Solver did not converge; not building a mesh");
        return;
    }

    let spec = GeometrySpec::geometric(x_start, x_end, n_volumes, solve.alpha)
        .expect("Recovered ratio failed validation");
    let mesh = build(&spec, Discretization::CellCenter).expect("Failed to build mesh");

    println!();
    println!("Interval widths:");
    for (i, w) in mesh.interval_widths().iter().enumerate() {
        println!("  h[{}] = {:.6}", i + 1, w);
    }
    println!(
        "First width {:.6} (target {}), total {:.6}",
        mesh.interval_widths()[0],
        h_first,
        mesh.length()
    );
}
