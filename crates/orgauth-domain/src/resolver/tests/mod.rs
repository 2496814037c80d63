//! Tests for the resolution engine.

mod closure_props;
