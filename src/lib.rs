// argument list to pass for blender to execute
pub mod args;

// container for the blender executable on this machine
pub mod blender;

// command line surface
pub mod cli;

// launcher error taxonomy
pub mod error;

// project root and config path resolution
pub mod project;
