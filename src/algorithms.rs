pub mod triangulation;
