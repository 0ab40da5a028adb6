mod controller;

pub use controller::PlotController;
