pub mod country_pipeline;

pub use country_pipeline::CountryPipeline;
