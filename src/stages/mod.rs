mod extract_frames;
mod reconstruct;
mod build_dataset;
mod train;
mod export;

pub use extract_frames::ExtractFrames;
pub use reconstruct::ReconstructPoses;
pub use build_dataset::BuildDataset;
pub use train::TrainModel;
pub use export::ExportSplat;
