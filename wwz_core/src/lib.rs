// Copyright (C) 2025 practicalace. Licensed under the GNU AGPLv3.
pub mod classes;
pub mod file_io;
pub mod locate;
pub mod pipeline;
pub mod render;
pub mod report;
pub mod rewrite;
pub mod standardize;
pub mod stylesheet;
