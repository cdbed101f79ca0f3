/// Backend submodules for the fetch worker
///
/// - `handlers`: turns UI actions into spawned fetch tasks
/// - `main_loop`: runtime thread and action polling loop
mod handlers;
mod main_loop;

// Re-export the main backend entry point
pub use main_loop::run_backend;
