//! Recording layer for asserting on spans and events in tests.

use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use tracing::{
    Event, Level, Subscriber,
    field::{Field, Visit},
    span::{Attributes, Id, Record},
};
use tracing_subscriber::{Layer, layer::Context, layer::SubscriberExt, registry::LookupSpan};

/// Layer that keeps every closed span and every event it observes.
///
/// Field values are stored as strings: `&str` fields verbatim and every
/// other value through its `Debug` form, so numbers read as `"12"`.
#[derive(Clone, Default)]
pub struct RecordingLayer {
    records: Arc<Mutex<Records>>,
}

#[derive(Default)]
struct Records {
    spans: Vec<SpanRecord>,
    events: Vec<EventRecord>,
}

impl RecordingLayer {
    /// Returns the closed spans in completion order.
    ///
    /// # Examples
    /// ```
    /// use nodal_test_support::tracing::RecordingLayer;
    ///
    /// let layer = RecordingLayer::default();
    /// assert!(layer.spans().is_empty());
    /// ```
    #[must_use]
    pub fn spans(&self) -> Vec<SpanRecord> {
        self.lock().spans.clone()
    }

    /// Returns the events in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<EventRecord> {
        self.lock().events.clone()
    }

    /// Returns the first closed span called `name`.
    #[must_use]
    pub fn span(&self, name: &str) -> Option<SpanRecord> {
        self.lock().spans.iter().find(|span| span.name == name).cloned()
    }

    /// Returns the first event at `level` whose message is `message`.
    #[must_use]
    pub fn event(&self, level: Level, message: &str) -> Option<EventRecord> {
        self.lock()
            .events
            .iter()
            .find(|event| event.level == level && event.message() == Some(message))
            .cloned()
    }

    fn lock(&self) -> MutexGuard<'_, Records> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Runs `action` with a fresh [`RecordingLayer`] installed as the thread's
/// default subscriber and returns its result with the layer.
///
/// # Examples
/// ```
/// use nodal_test_support::tracing::with_recording;
/// use tracing::Level;
///
/// let ((), layer) = with_recording(|| tracing::info!(answer = 42, "ready"));
/// let event = layer.event(Level::INFO, "ready").expect("event recorded");
/// assert_eq!(event.field("answer"), Some("42"));
/// ```
pub fn with_recording<T>(action: impl FnOnce() -> T) -> (T, RecordingLayer) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let output = tracing::subscriber::with_default(subscriber, action);
    (output, layer)
}

/// A closed span with its name and recorded fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanRecord {
    /// Span name from the tracing metadata.
    pub name: String,
    /// Fields recorded at creation or later through `Span::record`.
    pub fields: HashMap<String, String>,
}

impl SpanRecord {
    /// Returns the recorded value of `name`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// An emitted event with its level, target and fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    /// Level of the event.
    pub level: Level,
    /// Target from the event metadata, usually the emitting module path.
    pub target: String,
    /// Structured fields, including `message`.
    pub fields: HashMap<String, String>,
}

impl EventRecord {
    /// Returns the recorded value of `name`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Returns the event message.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.field("message")
    }
}

struct PendingSpan(SpanRecord);

impl<S> Layer<S> for RecordingLayer
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut fields = HashMap::new();
        attrs.record(&mut FieldVisitor(&mut fields));
        span.extensions_mut().insert(PendingSpan(SpanRecord {
            name: attrs.metadata().name().to_owned(),
            fields,
        }));
    }

    fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        if let Some(PendingSpan(record)) = span.extensions_mut().get_mut::<PendingSpan>() {
            values.record(&mut FieldVisitor(&mut record.fields));
        }
    }

    fn on_close(&self, id: Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(&id) else {
            return;
        };
        if let Some(PendingSpan(record)) = span.extensions_mut().remove::<PendingSpan>() {
            self.lock().spans.push(record);
        }
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = HashMap::new();
        event.record(&mut FieldVisitor(&mut fields));
        let metadata = event.metadata();
        self.lock().events.push(EventRecord {
            level: *metadata.level(),
            target: metadata.target().to_owned(),
            fields,
        });
    }
}

struct FieldVisitor<'a>(&'a mut HashMap<String, String>);

impl Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_owned(), value.to_owned());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_owned(), format!("{value:?}"));
    }
}
