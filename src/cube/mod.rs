pub use orientation::{Orientation, Rotation};
pub use topology::{
    AdjacencyTable, Crossing, CubeTopology, Edge, Entry, Link, RotationDelta, TopologyError,
    CUBE_ADJACENCY,
};

mod orientation;
mod topology;
