pub mod auto_feedback;
