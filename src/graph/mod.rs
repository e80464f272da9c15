pub(crate) mod line_graph;
pub(crate) mod opts;
