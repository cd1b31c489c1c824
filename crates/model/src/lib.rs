
pub mod coordinate;
pub mod measurement;
pub mod path;
pub mod report;
pub mod shape;

/// Sample values shown by the schema endpoints.
pub trait ExampleData {
    fn example_data() -> Self;
}
