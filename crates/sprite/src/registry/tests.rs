use std::sync::{Arc, Barrier};

use rstest::rstest;

use super::SpriteRegistry;

fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_max_level(tracing::Level::DEBUG)
		.with_test_writer()
		.try_init();
}

#[test]
fn same_name_returns_same_sprite() {
	let registry = SpriteRegistry::new();
	let first = registry.get_sprite("sprite.svg");
	let second = registry.get_sprite("sprite.svg");
	assert!(Arc::ptr_eq(&first, &second));
	assert_eq!(registry.len(), 1);
}

#[rstest]
#[case("sprite.svg", "icons.svg")]
#[case("a/sprite.svg", "b/sprite.svg")]
#[case("[chunkname].svg", "[chunkname]-2.svg")]
fn distinct_names_return_distinct_sprites(#[case] a: &str, #[case] b: &str) {
	let registry = SpriteRegistry::new();
	let first = registry.get_sprite(a);
	let second = registry.get_sprite(b);
	assert!(!Arc::ptr_eq(&first, &second));
	assert_eq!(first.name(), a);
	assert_eq!(second.name(), b);
	assert_eq!(registry.len(), 2);
}

#[test]
fn lookup_does_not_create() {
	let registry = SpriteRegistry::new();
	assert!(registry.get("sprite.svg").is_none());
	assert!(registry.is_empty());

	let created = registry.get_sprite("sprite.svg");
	assert!(Arc::ptr_eq(&registry.get("sprite.svg").unwrap(), &created));
}

#[test]
fn racing_creation_yields_one_instance() {
	init_tracing();
	let registry = SpriteRegistry::new();
	let barrier = Barrier::new(16);

	let sprites: Vec<_> = std::thread::scope(|scope| {
		let handles: Vec<_> = (0..16)
			.map(|_| {
				scope.spawn(|| {
					barrier.wait();
					registry.get_sprite("sprite.svg")
				})
			})
			.collect();
		handles.into_iter().map(|h| h.join().unwrap()).collect()
	});

	assert_eq!(registry.len(), 1);
	for sprite in &sprites[1..] {
		assert!(Arc::ptr_eq(sprite, &sprites[0]));
	}
}

#[test]
fn sprites_are_listed_by_name() {
	let registry = SpriteRegistry::new();
	for name in ["c.svg", "a.svg", "b.svg"] {
		registry.get_sprite(name);
	}
	let names: Vec<_> = registry
		.sprites()
		.iter()
		.map(|s| s.name().to_owned())
		.collect();
	assert_eq!(names, ["a.svg", "b.svg", "c.svg"]);
}

#[test]
fn reset_starts_a_fresh_build() {
	init_tracing();
	let registry = SpriteRegistry::new();
	let old = registry.get_sprite("sprite.svg");
	old.add_icon("a.svg", "a", "<svg/>").unwrap();

	registry.reset();
	assert!(registry.is_empty());

	let fresh = registry.get_sprite("sprite.svg");
	assert!(!Arc::ptr_eq(&old, &fresh));
	assert!(fresh.is_empty());
	assert_eq!(old.len(), 1);
}

#[test]
fn registries_are_independent() {
	let one = SpriteRegistry::new();
	let two = SpriteRegistry::new();
	one.get_sprite("sprite.svg").add_icon("a.svg", "a", "<svg/>").unwrap();

	assert!(two.get("sprite.svg").is_none());
	assert!(two.get_sprite("sprite.svg").is_empty());
}
