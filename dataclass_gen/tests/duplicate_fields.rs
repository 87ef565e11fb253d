//! Duplicate field names are dropped with a logged warning.

use std::io;
use std::sync::{Arc, Mutex};

use dataclass_gen::{DataClass, DataModelField, Reference, Types};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = BufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        BufferWriter(Arc::clone(&self.0))
    }
}

impl io::Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| io::Error::other("lock poisoned"))?;
        guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn build_with_captured_logs(fields: Vec<DataModelField>) -> (DataClass, String) {
    let sink: SharedBuffer = SharedBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(sink.clone())
        .with_max_level(Level::WARN)
        .without_time()
        .finish();

    let dataclass: DataClass = tracing::subscriber::with_default(subscriber, || {
        DataClass::new(Reference::new("Pet", "Pet"), fields)
    });

    let bytes: Vec<u8> = sink.0.lock().expect("lock output").clone();
    let logs: String = String::from_utf8(bytes).expect("utf8 log output");
    (dataclass, logs)
}

#[test]
fn duplicate_field_name_logs_warning() {
    let (dataclass, logs) = build_with_captured_logs(vec![
        DataModelField::new("name", Types::String, true),
        DataModelField::new("name", Types::Integer, true),
    ]);

    assert_eq!(1, dataclass.fields().len());
    let line: &str = logs
        .lines()
        .find(|l| l.contains("field name is duplicated"))
        .expect("duplicate warning line");
    assert!(line.contains("WARN"), "unexpected level in: {line}");
    assert!(line.contains("field=name"), "missing field name in: {line}");
    assert!(line.contains("model=Pet"), "missing model name in: {line}");
}

#[test]
fn unique_and_unnamed_fields_log_nothing() {
    let (dataclass, logs) = build_with_captured_logs(vec![
        DataModelField::new("", Types::String, true),
        DataModelField::new("", Types::String, true),
        DataModelField::new("age", Types::Integer, false),
    ]);

    assert_eq!(3, dataclass.fields().len());
    assert!(logs.trim().is_empty(), "unexpected logs: {logs}");
}
