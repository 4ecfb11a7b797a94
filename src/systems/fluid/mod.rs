//! Fluid System - Stable Fluids passes on a padded grid
//!
//! - Boundary: ghost cells mirror the interior (closed box, free slip)
//! - Linear solve: fixed-sweep Gauss-Seidel shared by diffusion and pressure
//! - Diffuse: implicit spreading, stable for any timestep
//! - Advect: semi-Lagrangian backward trace with bilinear sampling
//! - Project: pressure solve that strips the divergent part of velocity
//!
//! Every pass takes its destination as `&mut Field` and its sources as
//! `&Field`, so the caller spells out which buffer plays which role.

mod perf;
mod boundary;
mod linear_solve;
mod diffuse;
mod advect;
mod project;

pub use perf::{reset_solver_counters, take_solver_counters, SolverCounters};
pub use boundary::set_boundary;
pub use linear_solve::linear_solve;
pub use diffuse::diffuse;
pub use advect::advect;
pub use project::{max_divergence, project};
