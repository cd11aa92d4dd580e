//! Session-level behaviour of the composer against real stores

use newsletter_composer_engine::models::catalog::{self, Category};
use newsletter_composer_engine::{
    Alignment, BlockId, BlockKind, BlockPatch, BlockType, Cmd, Composer, Direction,
    DocumentSettings, JsonStore, MemoryStore, Notification, OwnerId, Phase, Position,
    RecordingNotifier, SettingsPatch, ShapeKind, Store,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;

fn owner() -> OwnerId {
    OwnerId::new("ada@example.com")
}

/// A document touching every block variant and a few edited fields
fn compose(composer: &mut Composer) {
    for block_type in BlockType::ALL {
        composer.add_block(block_type, Position::Bottom);
    }
    let ids: Vec<BlockId> = composer.blocks().iter().map(|b| b.id).collect();

    composer
        .update_block(ids[0], &BlockPatch::content("Welcome aboard"))
        .unwrap();
    composer
        .update_block(
            ids[6],
            &BlockPatch {
                shape_type: Some(ShapeKind::Triangle),
                shape_color: Some("#ff0000".to_string()),
                ..BlockPatch::default()
            },
        )
        .unwrap();
    composer
        .update_block(ids[1], &BlockPatch::alignment(Alignment::Right))
        .unwrap();
    composer.move_block(ids[3], Direction::Up).unwrap();
    composer
        .update_settings(&SettingsPatch {
            title: Some("October digest".to_string()),
            width: Some(720),
            header_color: Some("#111827".to_string()),
            ..SettingsPatch::default()
        })
        .unwrap();
}

fn assert_roundtrip<S: Store>(store: &S) {
    let notifier = RecordingNotifier::new();
    let mut original = Composer::new(owner());
    original.load(store).unwrap();
    compose(&mut original);
    original.save(store, &notifier).unwrap();

    let mut reloaded = Composer::new(owner());
    reloaded.load(store).unwrap();

    assert_eq!(reloaded.blocks(), original.blocks());
    assert_eq!(reloaded.settings(), original.settings());
    assert_eq!(reloaded.template_id(), original.template_id());
    assert_eq!(reloaded.phase(), Phase::Ready);
}

#[test]
fn test_roundtrip_through_memory_store() {
    assert_roundtrip(&MemoryStore::new());
}

#[test]
fn test_roundtrip_through_json_store() {
    let dir = TempDir::new().unwrap();
    let store = JsonStore::create(dir.path()).unwrap();
    assert_roundtrip(&store);

    // A fresh handle on the same directory sees the same document
    let reopened = JsonStore::open(dir.path()).unwrap();
    let template = reopened.fetch_latest_template(&owner()).unwrap().unwrap();
    assert_eq!(template.settings.title, "October digest");
    assert_eq!(template.blocks.len(), BlockType::ALL.len());
}

#[test]
fn test_second_save_updates_same_template() {
    let dir = TempDir::new().unwrap();
    let store = JsonStore::create(dir.path()).unwrap();
    let notifier = RecordingNotifier::new();

    let mut composer = Composer::new(owner());
    composer.load(&store).unwrap();
    composer.add_block(BlockType::Heading, Position::Bottom);
    let first = composer.save(&store, &notifier).unwrap();

    let mut later = Composer::new(owner());
    later.load(&store).unwrap();
    later.add_block(BlockType::Spacer, Position::Top);
    let second = later.save(&store, &notifier).unwrap();

    assert_eq!(first, second);
    let files = std::fs::read_dir(dir.path().join("templates")).unwrap().count();
    assert_eq!(files, 1);
}

#[test]
fn test_selector_scenario_adds_circle() {
    let mut composer = Composer::new(owner());
    composer.load(&MemoryStore::new()).unwrap();
    composer.add_block(BlockType::Paragraph, Position::Bottom);

    composer.apply(Cmd::OpenSelector {
        position: Position::After(0),
    })
    .unwrap();
    assert_eq!(Category::default(), Category::Text);

    let entry = Category::Media
        .entries()
        .iter()
        .find(|entry| entry.label == "Shape - Circle")
        .unwrap();
    let id = composer.add_entry(entry, Position::After(0));

    let snapshot = composer.snapshot();
    assert_eq!(snapshot.selector, None);
    assert_eq!(snapshot.selected, Some(id));
    let row = snapshot.selected_row().unwrap();
    assert_eq!(row.index, 1);
    assert_eq!(row.block.block_type(), BlockType::ShapeCircle);
    assert_eq!(row.block.alignment, Alignment::Center);
}

#[test]
fn test_heading_entries_preset_level() {
    let mut composer = Composer::new(owner());
    for label in ["Heading 1", "Heading 2", "Heading 3"] {
        let entry = catalog::find_entry(label).unwrap();
        composer.add_entry(entry, Position::Bottom);
    }

    let levels: Vec<u8> = composer
        .blocks()
        .iter()
        .filter_map(|block| match &block.kind {
            BlockKind::Heading { heading_level, .. } => Some(heading_level.get()),
            _ => None,
        })
        .collect();
    assert_eq!(levels, vec![1, 2, 3]);
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Add(BlockType, Position),
    MoveUp(usize),
    MoveDown(usize),
    Delete(usize),
}

#[rstest]
#[case(vec![
    Op::Add(BlockType::Heading, Position::Bottom),
    Op::Add(BlockType::Paragraph, Position::Top),
    Op::MoveDown(0),
    Op::Delete(1),
])]
#[case(vec![
    Op::Add(BlockType::Spacer, Position::Bottom),
    Op::Add(BlockType::Divider, Position::After(0)),
    Op::Add(BlockType::Button, Position::After(7)),
    Op::MoveUp(0),
    Op::MoveDown(2),
    Op::MoveUp(2),
    Op::Delete(0),
    Op::Add(BlockType::ShapeSquare, Position::Top),
])]
#[case(vec![
    Op::Add(BlockType::Image, Position::Top),
    Op::Delete(0),
    Op::Add(BlockType::FullArticle, Position::Bottom),
    Op::Add(BlockType::CustomHtml, Position::Bottom),
    Op::MoveUp(1),
    Op::MoveUp(0),
])]
fn test_length_and_permutation_properties(#[case] ops: Vec<Op>) {
    let mut composer = Composer::new(owner());
    let mut adds = 0;
    let mut deletes = 0;

    for op in ops {
        let before: Vec<BlockId> = composer.blocks().iter().map(|b| b.id).collect();
        match op {
            Op::Add(block_type, position) => {
                composer.add_block(block_type, position);
                adds += 1;
            }
            Op::MoveUp(index) | Op::MoveDown(index) => {
                let up = matches!(op, Op::MoveUp(_));
                let id = before[index];
                let moved = composer
                    .move_block(id, if up { Direction::Up } else { Direction::Down })
                    .unwrap();
                let after: Vec<BlockId> = composer.blocks().iter().map(|b| b.id).collect();

                let at_edge = if up { index == 0 } else { index + 1 == before.len() };
                assert_eq!(moved, !at_edge);
                if at_edge {
                    assert_eq!(after, before);
                } else {
                    let target = if up { index - 1 } else { index + 1 };
                    let mut expected = before.clone();
                    expected.swap(index, target);
                    assert_eq!(after, expected);
                }
            }
            Op::Delete(index) => {
                composer.delete_block(before[index]).unwrap();
                deletes += 1;
            }
        }
        assert_eq!(composer.blocks().len(), adds - deletes);
    }
}

#[test]
fn test_save_failure_then_retry() {
    let store = MemoryStore::new();
    let notifier = RecordingNotifier::new();
    let mut composer = Composer::new(owner());
    composer.load(&store).unwrap();
    compose(&mut composer);
    let before = composer.blocks().to_vec();

    store.set_offline(true);
    assert!(composer.save(&store, &notifier).is_err());
    assert_eq!(composer.blocks(), before.as_slice());
    assert!(matches!(
        notifier.last(),
        Some(Notification::Error(message)) if message.starts_with("Failed to save template")
    ));

    store.set_offline(false);
    composer.save(&store, &notifier).unwrap();
    assert!(matches!(notifier.last(), Some(Notification::Success(_))));
    assert_eq!(store.templates_for(&owner()).len(), 1);
}

#[test]
fn test_load_failure_degrades_without_notification() {
    let dir = TempDir::new().unwrap();
    let store = JsonStore::create(dir.path()).unwrap();
    std::fs::write(dir.path().join("settings").join("grace.json"), "not json").unwrap();

    let mut composer = Composer::new(OwnerId::new("grace"));
    let result = composer.load(&store);

    assert!(result.is_err());
    assert_eq!(composer.phase(), Phase::Ready);
    assert!(composer.blocks().is_empty());
    assert_eq!(composer.settings(), &DocumentSettings::default());
}

#[test]
fn test_corrupt_template_file_does_not_block_other_owners() {
    let dir = TempDir::new().unwrap();
    let store = JsonStore::create(dir.path()).unwrap();
    let notifier = RecordingNotifier::new();

    let mut ada = Composer::new(owner());
    ada.load(&store).unwrap();
    ada.add_block(BlockType::Paragraph, Position::Top);
    ada.save(&store, &notifier).unwrap();
    std::fs::write(dir.path().join("templates").join("corrupt.json"), "not json").unwrap();

    let mut reloaded = Composer::new(owner());
    reloaded.load(&store).unwrap();
    assert_eq!(reloaded.blocks(), ada.blocks());

    let mut grace = Composer::new(OwnerId::new("grace"));
    assert!(grace.load(&store).is_ok());
    assert!(grace.blocks().is_empty());
}

#[test]
fn test_save_after_unrelated_failures_keeps_other_owner_intact() {
    let store = MemoryStore::new();
    let notifier = RecordingNotifier::new();

    let mut ada = Composer::new(owner());
    ada.load(&store).unwrap();
    ada.add_block(BlockType::Heading, Position::Top);
    ada.save(&store, &notifier).unwrap();

    let mut grace = Composer::new(OwnerId::new("grace"));
    grace.load(&store).unwrap();
    assert!(grace.blocks().is_empty());
    grace.add_block(BlockType::Divider, Position::Top);
    grace.save(&store, &notifier).unwrap();

    let mut reloaded = Composer::new(owner());
    reloaded.load(&store).unwrap();
    assert_eq!(reloaded.blocks(), ada.blocks());
}
