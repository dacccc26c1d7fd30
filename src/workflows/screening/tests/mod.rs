mod common;
mod insights;
mod intake;
mod report;
