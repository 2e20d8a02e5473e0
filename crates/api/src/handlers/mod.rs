pub mod chord;
pub mod chord_quality;
pub mod key;
pub mod pitch;
pub mod scale;
