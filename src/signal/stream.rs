/* src/signal/stream.rs */

use futures_util::Stream;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;

use crate::holder::{Change, Store};

/// Stream of [`Change`]s produced by reload passes.
pub struct ChangeStream {
	inner: BroadcastStream<Change>,
}

impl Stream for ChangeStream {
	type Item = std::result::Result<Change, BroadcastStreamRecvError>;

	fn poll_next(
		mut self: std::pin::Pin<&mut Self>,
		cx: &mut std::task::Context<'_>,
	) -> std::task::Poll<Option<Self::Item>> {
		std::pin::Pin::new(&mut self.inner).poll_next(cx)
	}
}

impl Store {
	/// Subscribes to change events as a stream.
	pub fn stream(&self) -> ChangeStream {
		ChangeStream {
			inner: BroadcastStream::new(self.subscribe()),
		}
	}
}
