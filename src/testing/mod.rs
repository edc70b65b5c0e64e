
#[allow(unused_imports)]
pub use ports::MockScaffoldFs;
#[allow(unused_imports)]
pub use ports::RecordingReporter;
#[allow(unused_imports)]
pub use ports::TEST_ROOT;
#[allow(unused_imports)]
pub use ports::TestFiles;
