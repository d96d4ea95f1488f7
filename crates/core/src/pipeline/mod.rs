pub mod analyze_call_use_case;
pub mod call_analysis;
pub mod pipeline_observer;
