// End-to-end rendering tests: item list in, markup out

mod common;

use common::{plain_config, plain_text, StripHarness};
use std::cell::Cell;
use tabstrip::config::RenderConfig;
use tabstrip::model::{
    Activity, Icon, IconTable, ItemId, ItemSource, MemoryItem, MemorySource, NoIcons,
    SourceError, TabpageInfo,
};
use tabstrip::view::scroll::ViewportId;
use tabstrip::view::segment::runs_width;
use tabstrip::view::strip::SidebarOffset;
use tabstrip::view::tabline::{RenderError, RenderStatus};
use tabstrip::RenderInput;

fn unpadded() -> RenderConfig {
    RenderConfig {
        minimum_padding: 0,
        maximum_padding: 0,
        ..plain_config()
    }
}

/// Three items of exactly 10 columns, the last one current
fn ten_column_items() -> Vec<MemoryItem> {
    vec![
        MemoryItem::new(1, "aaaaaaaa"),
        MemoryItem::new(2, "bbbbbbbb"),
        MemoryItem::new(3, "cccccccc").current(),
    ]
}

#[test]
fn single_item_markup() {
    let mut harness = StripHarness::new([MemoryItem::new(1, "a").current()], 20);
    insta::assert_snapshot!(
        harness.markup(),
        @"%#BufferCurrentSign#|%#BufferCurrent#    %#BufferCurrent#a%#BufferCurrent#    %#BufferCurrent# %#BufferTabpageFill#"
    );
}

#[test]
fn items_share_padding() {
    let mut harness = StripHarness::new(
        [
            MemoryItem::new(1, "a"),
            MemoryItem::new(2, "b").current(),
            MemoryItem::new(3, "c").visible(),
        ],
        40,
    );
    assert_eq!(harness.text(), "|    a     |    b     |    c     ");
}

#[test]
fn percent_in_names_is_escaped() {
    let mut harness = StripHarness::new([MemoryItem::new(1, "100%").current()], 30);
    let markup = harness.markup();
    assert!(markup.contains("%#BufferCurrent#100%%%#BufferCurrent#"), "{markup}");
}

#[test]
fn modified_items_use_mod_style_and_glyph() {
    let config = RenderConfig {
        minimum_padding: 1,
        maximum_padding: 1,
        ..plain_config()
    };
    let mut harness =
        StripHarness::new([MemoryItem::new(1, "a").current().modified()], 40).with_config(config);
    let runs = harness.runs();
    assert_eq!(plain_text(&runs), "| a  * ");
    assert!(runs
        .iter()
        .any(|run| run.style().group_name() == "BufferCurrentMod" && run.text() == "* "));
}

#[test]
fn scrolls_to_keep_current_item_visible() {
    let mut harness = StripHarness::new(ten_column_items(), 15).with_config(unpadded());
    assert_eq!(harness.text(), "bbbb |cccccccc ");
    assert_eq!(harness.scroll(), 15);

    harness.source.set_current(ItemId(1));
    assert_eq!(harness.text(), "|aaaaaaaa |bbbb");
    assert_eq!(harness.scroll(), 0);
}

#[test]
fn current_item_wider_than_window_shows_its_start_steadily() {
    let items = vec![
        MemoryItem::new(1, "aaaaaaaa"),
        MemoryItem::new(2, "b".repeat(26)).current(),
    ];
    let mut harness = StripHarness::new(items, 15).with_config(unpadded());

    let first = harness.text();
    assert_eq!(first, format!("|{}", "b".repeat(14)));
    assert_eq!(harness.scroll(), 10);
    for _ in 0..3 {
        assert_eq!(harness.text(), first);
        assert_eq!(harness.scroll(), 10);
    }
}

#[test]
fn explicit_scroll_is_clamped_and_refocused() {
    let items = vec![
        MemoryItem::new(1, "aaaaaaaa").current(),
        MemoryItem::new(2, "bbbbbbbb"),
        MemoryItem::new(3, "cccccccc"),
    ];
    let mut harness = StripHarness::new(items, 15).with_config(unpadded());

    // Scrolling past the current item is pulled back to its start.
    harness.strip.scroll_to(None, 100);
    assert_eq!(harness.text(), "|aaaaaaaa |bbbb");
    assert_eq!(harness.strip.scroll_state(None).target, 0);
}

#[test]
fn viewports_scroll_independently() {
    let source = MemorySource::from_items(ten_column_items());
    let config = unpadded();
    let mut strip = tabstrip::TabStrip::new();
    let wide = RenderInput::new(&source, &NoIcons, &config, 40).with_viewport(ViewportId(1));
    let narrow = RenderInput::new(&source, &NoIcons, &config, 15).with_viewport(ViewportId(2));

    strip.render_runs(&wide);
    strip.render_runs(&narrow);
    assert_eq!(strip.scroll_state(Some(ViewportId(1))).current, 0);
    assert_eq!(strip.scroll_state(Some(ViewportId(2))).current, 15);
    assert_eq!(strip.scroll_state(None).current, 0);
}

#[test]
fn animation_moves_toward_target_between_renders() {
    let config = RenderConfig {
        animation: true,
        ..unpadded()
    };
    let mut harness = StripHarness::new(ten_column_items(), 15).with_config(config);

    assert_eq!(harness.text(), "|aaaaaaaa |bbbb");
    assert_eq!(harness.strip.scroll_state(None).target, 15);

    let mut frames = 0;
    while harness.strip.advance_scroll(None, 1.0 / 120.0) {
        frames += 1;
        assert!(frames < 100);
    }
    assert_eq!(harness.text(), "bbbb |cccccccc ");
}

#[test]
fn tab_page_indicator_is_right_aligned() {
    let mut harness = StripHarness::new([MemoryItem::new(1, "a").current()], 30);
    harness.source.tabpages = TabpageInfo {
        current: 2,
        total: 3,
    };
    let runs = harness.runs();
    assert_eq!(
        plain_text(&runs),
        format!("|    a     {} 2/3 ", " ".repeat(14))
    );
    assert_eq!(runs_width(&runs), 30);
}

#[test]
fn tab_page_indicator_can_be_disabled() {
    let config = RenderConfig {
        tabpages: false,
        ..plain_config()
    };
    let mut harness = StripHarness::new([MemoryItem::new(1, "a").current()], 30).with_config(config);
    harness.source.tabpages = TabpageInfo {
        current: 2,
        total: 3,
    };
    assert!(!harness.text().contains("2/3"));
}

#[test]
fn sidebar_offset_is_reserved() {
    let mut harness = StripHarness::new([MemoryItem::new(1, "a").current()], 30);
    harness
        .strip
        .set_offset(Some(SidebarOffset::new(10, "Tree")));
    let runs = harness.runs();
    assert_eq!(plain_text(&runs), " Tree     |    a     ");
    assert_eq!(runs[0].style().group_name(), "BufferOffset");
}

#[test]
fn shrink_to_fit_truncates_names() {
    let config = RenderConfig {
        shrink_to_fit: true,
        ..plain_config()
    };
    let items = (1..=3).map(|id| MemoryItem::new(id, "abcdefghij"));
    let mut harness = StripHarness::new(items, 24).with_config(config);
    let runs = harness.runs();
    assert_eq!(plain_text(&runs), "| abc…  | abc…  | abc…  ");
    assert_eq!(runs_width(&runs), 24);
}

#[test]
fn pick_mode_shows_jump_letters() {
    let mut harness = StripHarness::new(
        [
            MemoryItem::new(1, "main.rs").with_jump_letter('a'),
            MemoryItem::new(2, "lib.rs").current().with_jump_letter('s'),
        ],
        40,
    );
    harness.source.set_picking(true);
    let markup = harness.markup();
    assert!(markup.contains("%#BufferInactiveTarget#a%#BufferInactive#ain.rs"), "{markup}");
    assert!(markup.contains("%#BufferCurrentTarget#s%#BufferCurrent#ib.rs"), "{markup}");
}

#[test]
fn pick_mode_shows_wide_jump_letters() {
    let mut harness = StripHarness::new(
        [MemoryItem::new(1, "main.rs").current().with_jump_letter('あ')],
        40,
    );
    harness.source.set_picking(true);
    let markup = harness.markup();
    assert!(markup.contains("%#BufferCurrentTarget#あ%#BufferCurrent#in.rs"), "{markup}");
    assert!(harness.strip.is_enabled());

    harness.config.icons = tabstrip::config::IconMode::Icons;
    let icons = IconTable::default().with_extension("rs", Icon::new("R", Some("DevIconRust")));
    let runs = harness.runs_with_icons(&icons);
    assert!(runs
        .iter()
        .any(|run| run.style().group_name() == "BufferCurrentTarget" && run.text() == "あ "));
    assert!(runs.iter().any(|run| run.text() == "main.rs"));
    assert!(harness.strip.is_enabled(), "{:?}", harness.strip.status());
}

#[test]
fn icons_come_from_the_provider() {
    let config = RenderConfig {
        icons: tabstrip::config::IconMode::Icons,
        ..plain_config()
    };
    let icons = IconTable::default().with_extension("rs", Icon::new("R", Some("DevIconRust")));
    let mut harness =
        StripHarness::new([MemoryItem::new(1, "a.rs").current()], 40).with_config(config);
    let runs = harness.runs_with_icons(&icons);
    let icon = runs
        .iter()
        .find(|run| run.text() == "R ")
        .expect("icon run");
    assert_eq!(icon.style().group_name(), "DevIconRust");
}

/// Item list that still reports an id whose item is already gone
struct StaleList {
    inner: MemorySource,
    ghost: ItemId,
}

impl ItemSource for StaleList {
    fn item_ids(&self) -> Result<Vec<ItemId>, SourceError> {
        let mut ids = self.inner.item_ids()?;
        ids.insert(1, self.ghost);
        Ok(ids)
    }
    fn name(&self, id: ItemId) -> Result<String, SourceError> {
        self.inner.name(id)
    }
    fn activity(&self, id: ItemId) -> Result<Activity, SourceError> {
        self.inner.activity(id)
    }
    fn is_modified(&self, id: ItemId) -> Result<bool, SourceError> {
        self.inner.is_modified(id)
    }
    fn is_pinned(&self, id: ItemId) -> Result<bool, SourceError> {
        self.inner.is_pinned(id)
    }
    fn is_closing(&self, id: ItemId) -> Result<bool, SourceError> {
        self.inner.is_closing(id)
    }
    fn number(&self, id: ItemId) -> Result<u32, SourceError> {
        self.inner.number(id)
    }
    fn filetype(&self, id: ItemId) -> Result<Option<String>, SourceError> {
        self.inner.filetype(id)
    }
}

#[test]
fn vanished_items_are_skipped() {
    common::init_tracing();
    let source = StaleList {
        inner: MemorySource::from_items([
            MemoryItem::new(1, "a").current(),
            MemoryItem::new(2, "b"),
        ]),
        ghost: ItemId(99),
    };
    let config = plain_config();
    let mut strip = tabstrip::TabStrip::new();
    let runs = strip.render_runs(&RenderInput::new(&source, &NoIcons, &config, 40));
    assert_eq!(plain_text(&runs), "|    a     |    b     ");
    assert!(strip.is_enabled());
}

/// Item list whose name accessor panics while `armed` is set
struct PanickingList {
    inner: MemorySource,
    armed: Cell<bool>,
    calls: Cell<usize>,
}

impl ItemSource for PanickingList {
    fn item_ids(&self) -> Result<Vec<ItemId>, SourceError> {
        self.calls.set(self.calls.get() + 1);
        self.inner.item_ids()
    }
    fn name(&self, id: ItemId) -> Result<String, SourceError> {
        if self.armed.get() {
            panic!("name lookup exploded");
        }
        self.inner.name(id)
    }
    fn activity(&self, id: ItemId) -> Result<Activity, SourceError> {
        self.inner.activity(id)
    }
    fn is_modified(&self, id: ItemId) -> Result<bool, SourceError> {
        self.inner.is_modified(id)
    }
    fn is_pinned(&self, id: ItemId) -> Result<bool, SourceError> {
        self.inner.is_pinned(id)
    }
    fn is_closing(&self, id: ItemId) -> Result<bool, SourceError> {
        self.inner.is_closing(id)
    }
    fn number(&self, id: ItemId) -> Result<u32, SourceError> {
        self.inner.number(id)
    }
    fn filetype(&self, id: ItemId) -> Result<Option<String>, SourceError> {
        self.inner.filetype(id)
    }
}

#[test]
fn panic_disables_rendering_until_enabled() {
    common::init_tracing();
    let source = PanickingList {
        inner: MemorySource::from_items([MemoryItem::new(1, "a").current()]),
        armed: Cell::new(true),
        calls: Cell::new(0),
    };
    let config = plain_config();
    let input = RenderInput::new(&source, &NoIcons, &config, 20);
    let mut strip = tabstrip::TabStrip::new();

    assert_eq!(strip.render(&input), "");
    assert!(matches!(
        strip.status(),
        RenderStatus::Disabled(RenderError::Panicked(msg)) if msg == "name lookup exploded"
    ));

    // Disabled strips do not read the list at all.
    assert_eq!(strip.render(&input), "");
    assert_eq!(source.calls.get(), 1);

    assert!(matches!(
        strip.take_diagnostic(),
        Some(RenderError::Panicked(_))
    ));
    assert_eq!(strip.take_diagnostic(), None);

    source.armed.set(false);
    strip.enable();
    assert!(strip.render(&input).contains("%#BufferCurrent#a"));
    assert_eq!(strip.take_diagnostic(), None);
}

#[test]
fn empty_list_renders_only_fill() {
    let mut harness = StripHarness::new(Vec::new(), 40);
    assert_eq!(harness.markup(), "%#BufferTabpageFill#");
}

#[test]
fn closing_items_are_drawn_inactive() {
    let mut harness = StripHarness::new(
        [
            MemoryItem::new(1, "a").current().closing(),
            MemoryItem::new(2, "b"),
        ],
        40,
    );
    let markup = harness.markup();
    assert!(!markup.contains("BufferCurrent"), "{markup}");
}

#[test]
fn invalid_config_is_sanitized_before_rendering() {
    let config = RenderConfig {
        minimum_padding: -5,
        maximum_padding: -1,
        minimum_width: -10,
        ..plain_config()
    };
    let mut harness = StripHarness::new([MemoryItem::new(1, "a").current()], 20).with_config(config);
    assert_eq!(harness.text(), "|a ");
}
