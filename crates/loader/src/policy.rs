use sprig_sprite::UrlOrigin;

/// Decides whether an icon URL gets a cache-busting marker.
///
/// The first URL computed for a sprite is never busted, so a server-rendered page and its
/// client rehydration see identical markup. After that, only re-queries from the resource
/// that established the sprite's URL base are busted, and only once a live document is
/// available to pick up the refetched sprite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheBustPolicy {
	/// Whether the runtime has a live document (as opposed to server rendering).
	pub document_ready: bool,
}

impl CacheBustPolicy {
	pub fn new(document_ready: bool) -> Self {
		Self { document_ready }
	}

	pub fn should_bust(self, origin: UrlOrigin) -> bool {
		self.document_ready && origin == UrlOrigin::SameResource
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;
	use sprig_sprite::UrlOrigin;

	use super::CacheBustPolicy;

	#[rstest]
	#[case(false, UrlOrigin::Established, false)]
	#[case(false, UrlOrigin::SameResource, false)]
	#[case(false, UrlOrigin::OtherResource, false)]
	#[case(true, UrlOrigin::Established, false)]
	#[case(true, UrlOrigin::SameResource, true)]
	#[case(true, UrlOrigin::OtherResource, false)]
	fn busts_only_ready_same_resource_requeries(
		#[case] ready: bool,
		#[case] origin: UrlOrigin,
		#[case] expected: bool,
	) {
		assert_eq!(CacheBustPolicy::new(ready).should_bust(origin), expected);
	}
}
