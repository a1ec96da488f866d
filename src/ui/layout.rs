//! Layout calculations for the checkout TUI.
//!
//! Every rectangle the renderer draws into comes from these functions, and
//! mouse handling rebuilds the same layouts from the stored terminal size
//! to hit-test clicks. Keeping one source for both is what makes a click
//! land on the field that was drawn there.

use ratatui::layout::{Constraint, Layout, Margin, Position, Rect};

use crate::state::{ConversionTab, ConverterField, RecipientField, RecipientStep, SelectorState};
use crate::domain::FormField;

// ============================================================================
// Constants
// ============================================================================

/// Card width including its border.
pub const CARD_WIDTH: u16 = 60;

/// Card height including its border.
pub const CARD_HEIGHT: u16 = 21;

/// Height of the footer area in terminal rows.
pub const FOOTER_HEIGHT: u16 = 1;

/// Height of a bordered input or button.
pub const FIELD_HEIGHT: u16 = 3;

/// Width of the token/currency trigger inside an amount frame.
pub const AMOUNT_PICKER_WIDTH: u16 = 18;

/// Width of the country-code trigger inside the phone frame.
pub const COUNTRY_PICKER_WIDTH: u16 = 14;

/// Width of the clickable back arrow in the recipient header.
pub const BACK_WIDTH: u16 = 3;

/// Rows visible in an open picker before it scrolls.
pub const PICKER_MAX_ROWS: usize = 7;

/// Minimum width of an open picker list.
pub const POPUP_MIN_WIDTH: u16 = 30;

// ============================================================================
// Hit Regions
// ============================================================================

/// Field rectangles in focus order, usable for both drawing and clicks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLayout<F> {
    regions: Vec<(F, Rect)>,
}

impl<F: Copy + PartialEq> FormLayout<F> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    pub fn push(&mut self, field: F, area: Rect) {
        self.regions.push((field, area));
    }

    /// The area of `field`, or an empty rect when it is not laid out.
    #[must_use]
    pub fn rect(&self, field: F) -> Rect {
        self.regions
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, area)| *area)
            .unwrap_or_default()
    }

    /// The field under the given cell.
    #[must_use]
    pub fn hit(&self, column: u16, row: u16) -> Option<F> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(field, _)| *field)
    }
}

impl<F: Copy + PartialEq> Default for FormLayout<F> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Screen Frame
// ============================================================================

/// The centered card, the brand line under it and the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub card: Rect,
    /// Card interior with padding.
    pub body: Rect,
    pub brand: Rect,
    pub footer: Rect,
}

#[must_use]
pub fn calculate_screen_layout(area: Rect) -> ScreenLayout {
    let [main, footer] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)]).areas(area);
    let block = centered_popup_area(main, CARD_WIDTH, CARD_HEIGHT + 1);
    let [card, brand] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(block);

    ScreenLayout {
        card,
        body: card.inner(Margin::new(2, 1)),
        brand,
        footer,
    }
}

/// Centers an area of at most `width` x `height` within `parent`.
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width);
    let popup_height = height.min(parent.height);

    let popup_x = parent.x + (parent.width - popup_width) / 2;
    let popup_y = parent.y + (parent.height - popup_height) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

// ============================================================================
// Conversion Screen
// ============================================================================

/// An amount input: a bordered frame split into the amount text and a
/// token or currency trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountLayout {
    pub frame: Rect,
    pub amount: Rect,
    pub picker: Rect,
}

/// Splits an amount frame into the amount text and the picker trigger.
#[must_use]
pub fn calculate_amount_layout(frame: Rect) -> AmountLayout {
    let [amount, picker] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(AMOUNT_PICKER_WIDTH)])
            .areas(frame);
    AmountLayout {
        frame,
        amount,
        picker,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterLayout {
    pub screen: ScreenLayout,
    pub pay: AmountLayout,
    pub receive: AmountLayout,
    pub fields: FormLayout<ConverterField>,
}

#[must_use]
pub fn calculate_converter_layout(area: Rect) -> ConverterLayout {
    let screen = calculate_screen_layout(area);
    let [tabs, _, pay, _, receive, pay_from, pay_to, _, convert] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(FIELD_HEIGHT),
    ])
    .areas(screen.body);

    let pay = calculate_amount_layout(pay);
    let receive = calculate_amount_layout(receive);

    let mut fields = FormLayout::new();
    fields.push(ConverterField::Tabs, tabs);
    fields.push(ConverterField::PayAmount, pay.amount);
    fields.push(ConverterField::PayToken, pay.picker);
    fields.push(ConverterField::ReceiveAmount, receive.amount);
    fields.push(ConverterField::ReceiveCurrency, receive.picker);
    fields.push(ConverterField::PayFrom, pay_from);
    fields.push(ConverterField::PayTo, pay_to);
    fields.push(ConverterField::Convert, convert);

    ConverterLayout {
        screen,
        pay,
        receive,
        fields,
    }
}

/// Splits the tab row into one cell per tab.
#[must_use]
pub fn tab_areas(tabs: Rect) -> [Rect; 3] {
    Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(tabs)
}

/// The tab drawn at `column`, if any.
#[must_use]
pub fn tab_at(tabs: Rect, column: u16) -> Option<ConversionTab> {
    tab_areas(tabs)
        .iter()
        .position(|area| column >= area.x && column < area.right())
        .map(|index| ConversionTab::ALL[index])
}

// ============================================================================
// Recipient Screen
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipientLayout {
    pub screen: ScreenLayout,
    pub header: Rect,
    /// Clickable back arrow.
    pub back: Rect,
    pub fields: FormLayout<RecipientField>,
    /// Read-only account name box, on the bank sub-step.
    pub account_name: Option<Rect>,
    /// Frame around country code and number, on the contact sub-step.
    pub phone_frame: Option<Rect>,
    /// Where each field's inline error is drawn.
    pub errors: Vec<(FormField, Rect)>,
}

impl RecipientLayout {
    #[must_use]
    pub fn error_area(&self, field: FormField) -> Option<Rect> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, area)| *area)
    }
}

#[must_use]
pub fn calculate_recipient_layout(area: Rect, step: RecipientStep) -> RecipientLayout {
    let screen = calculate_screen_layout(area);
    let [header, _, form, next] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(FIELD_HEIGHT),
    ])
    .areas(screen.body);
    let back = Rect::new(header.x, header.y, BACK_WIDTH.min(header.width), header.height);

    let mut fields = FormLayout::new();
    let mut errors = Vec::new();
    let mut account_name = None;
    let mut phone_frame = None;

    match step {
        RecipientStep::Bank => {
            let [bank, bank_error, number, number_error, name, name_error, _] =
                Layout::vertical([
                    Constraint::Length(FIELD_HEIGHT),
                    Constraint::Length(1),
                    Constraint::Length(FIELD_HEIGHT),
                    Constraint::Length(1),
                    Constraint::Length(FIELD_HEIGHT),
                    Constraint::Length(1),
                    Constraint::Min(0),
                ])
                .areas(form);

            fields.push(RecipientField::Bank, bank);
            fields.push(RecipientField::AccountNumber, number);
            errors.push((FormField::Bank, bank_error));
            errors.push((FormField::AccountNumber, number_error));
            errors.push((FormField::AccountName, name_error));
            account_name = Some(name);
        }
        RecipientStep::Contact => {
            let [email, email_error, phone, phone_error, _] = Layout::vertical([
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .areas(form);
            let [country, number] = split_phone_frame(phone);

            fields.push(RecipientField::Email, email);
            fields.push(RecipientField::CountryCode, country);
            fields.push(RecipientField::Phone, number);
            errors.push((FormField::Email, email_error));
            errors.push((FormField::Phone, phone_error));
            phone_frame = Some(phone);
        }
    }
    fields.push(RecipientField::Next, next);

    RecipientLayout {
        screen,
        header,
        back,
        fields,
        account_name,
        phone_frame,
        errors,
    }
}

/// Splits the phone frame into the country-code trigger and the number.
#[must_use]
pub fn split_phone_frame(frame: Rect) -> [Rect; 2] {
    Layout::horizontal([
        Constraint::Length(COUNTRY_PICKER_WIDTH),
        Constraint::Min(0),
    ])
    .areas(frame)
}

// ============================================================================
// Success Screen
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessLayout {
    pub screen: ScreenLayout,
    pub content: Rect,
    pub restart: Rect,
}

#[must_use]
pub fn calculate_success_layout(area: Rect) -> SuccessLayout {
    let screen = calculate_screen_layout(area);
    let [content, restart] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(FIELD_HEIGHT)])
            .areas(screen.body);
    SuccessLayout {
        screen,
        content,
        restart,
    }
}

// ============================================================================
// Open Picker
// ============================================================================

/// Geometry of an open picker list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerPopupLayout {
    pub area: Rect,
    /// Search line, for searchable pickers.
    pub search: Option<Rect>,
    /// Option rows.
    pub rows: Rect,
    /// Index of the first filtered option shown.
    pub offset: usize,
}

impl PickerPopupLayout {
    /// Index into the filtered options of the row under the cell.
    #[must_use]
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        self.rows
            .contains(Position::new(column, row))
            .then(|| self.offset + usize::from(row - self.rows.y))
    }

    #[must_use]
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }
}

/// Places the list of an open picker next to its trigger.
///
/// The list opens below the trigger, or above it when there is no room,
/// and is right-aligned with the trigger when wider than it.
#[must_use]
pub fn calculate_picker_popup(
    trigger: Rect,
    picker: &SelectorState,
    bounds: Rect,
) -> PickerPopupLayout {
    let visible = picker.filtered().len().clamp(1, PICKER_MAX_ROWS) as u16;
    let search_height = if picker.is_searchable() { 2 } else { 0 };
    let height = (visible + 2 + search_height).min(bounds.height);
    let width = trigger.width.max(POPUP_MIN_WIDTH).min(bounds.width);

    let x = trigger.right().saturating_sub(width).max(bounds.x);
    let y = if trigger.bottom() + height <= bounds.bottom() {
        trigger.bottom()
    } else if trigger.y >= bounds.y + height {
        trigger.y - height
    } else {
        bounds.bottom().saturating_sub(height)
    };

    let area = Rect::new(x, y, width, height).intersection(bounds);
    let inner = area.inner(Margin::new(1, 1));
    let search = (search_height > 0).then(|| Rect::new(inner.x, inner.y, inner.width, 1));
    let rows = Rect::new(
        inner.x,
        inner.y + search_height.min(inner.height),
        inner.width,
        inner.height.saturating_sub(search_height),
    );

    PickerPopupLayout {
        area,
        search,
        rows,
        offset: list_offset(picker.highlighted(), usize::from(rows.height)),
    }
}

/// First visible row so the highlighted row stays on screen.
#[must_use]
pub const fn list_offset(highlighted: usize, visible: usize) -> usize {
    if visible == 0 {
        0
    } else {
        highlighted.saturating_sub(visible - 1)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Catalog;

    fn terminal() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    #[test]
    fn test_screen_layout_centers_card() {
        let layout = calculate_screen_layout(terminal());

        assert_eq!(layout.card.width, CARD_WIDTH);
        assert_eq!(layout.card.height, CARD_HEIGHT);
        assert_eq!(layout.card.x, 10);
        assert_eq!(layout.brand.y, layout.card.bottom());
        assert_eq!(layout.footer, Rect::new(0, 23, 80, 1));
        assert_eq!(layout.body.width, CARD_WIDTH - 4);
    }

    #[test]
    fn test_screen_layout_shrinks_in_small_terminal() {
        let layout = calculate_screen_layout(Rect::new(0, 0, 40, 12));
        assert_eq!(layout.card.width, 40);
        assert!(layout.card.bottom() <= 11);
    }

    #[test]
    fn test_converter_fields_do_not_overlap() {
        let layout = calculate_converter_layout(terminal());

        for (i, a) in ConverterField::ORDER.iter().enumerate() {
            let area_a = layout.fields.rect(*a);
            assert!(!area_a.is_empty(), "{a:?} laid out");
            for b in &ConverterField::ORDER[i + 1..] {
                assert!(
                    !area_a.intersects(layout.fields.rect(*b)),
                    "{a:?} overlaps {b:?}"
                );
            }
        }
        assert_eq!(layout.pay.picker.width, AMOUNT_PICKER_WIDTH);
        assert_eq!(layout.fields.rect(ConverterField::Convert).height, FIELD_HEIGHT);
    }

    #[test]
    fn test_converter_hit_testing() {
        let layout = calculate_converter_layout(terminal());
        let pay_from = layout.fields.rect(ConverterField::PayFrom);
        let token = layout.fields.rect(ConverterField::PayToken);

        assert_eq!(
            layout.fields.hit(pay_from.x + 5, pay_from.y + 1),
            Some(ConverterField::PayFrom)
        );
        assert_eq!(
            layout.fields.hit(token.x + 1, token.y + 1),
            Some(ConverterField::PayToken)
        );
        assert_eq!(layout.fields.hit(0, 0), None);
    }

    #[test]
    fn test_tab_at_maps_columns_to_tabs() {
        let tabs = Rect::new(12, 2, 54, 1);
        assert_eq!(tab_at(tabs, 12), Some(ConversionTab::CryptoToCash));
        assert_eq!(tab_at(tabs, 40), Some(ConversionTab::CashToCrypto));
        assert_eq!(tab_at(tabs, 65), Some(ConversionTab::CryptoToFiatLoan));
        assert_eq!(tab_at(tabs, 66), None);
    }

    #[test]
    fn test_recipient_layout_per_sub_step() {
        let bank = calculate_recipient_layout(terminal(), RecipientStep::Bank);
        assert!(bank.account_name.is_some());
        assert!(bank.phone_frame.is_none());
        assert!(bank.error_area(FormField::AccountName).is_some());
        assert!(bank.fields.rect(RecipientField::Email).is_empty());

        let contact = calculate_recipient_layout(terminal(), RecipientStep::Contact);
        assert!(contact.account_name.is_none());
        let frame = contact.phone_frame.expect("phone frame");
        let country = contact.fields.rect(RecipientField::CountryCode);
        let phone = contact.fields.rect(RecipientField::Phone);
        assert_eq!(country.width, COUNTRY_PICKER_WIDTH);
        assert_eq!(country.width + phone.width, frame.width);
        assert!(contact.fields.rect(RecipientField::Bank).is_empty());
    }

    #[test]
    fn test_back_arrow_is_top_left_of_body() {
        let layout = calculate_recipient_layout(terminal(), RecipientStep::Bank);
        assert_eq!(layout.back.x, layout.screen.body.x);
        assert_eq!(layout.back.y, layout.screen.body.y);
        assert_eq!(layout.back.width, BACK_WIDTH);
    }

    #[test]
    fn test_picker_popup_opens_below_and_right_aligned() {
        let catalog = Catalog::builtin();
        let mut picker = SelectorState::from_items(&catalog.tokens, true);
        picker.open();

        let trigger = Rect::new(48, 5, AMOUNT_PICKER_WIDTH, 3);
        let popup = calculate_picker_popup(trigger, &picker, terminal());

        assert_eq!(popup.area.y, trigger.bottom());
        assert_eq!(popup.area.right(), trigger.right());
        assert_eq!(popup.area.width, POPUP_MIN_WIDTH);
        // 4 options + borders + search line and divider
        assert_eq!(popup.area.height, 8);
        assert!(popup.search.is_some());
        assert_eq!(popup.rows.y, popup.area.y + 3);
    }

    #[test]
    fn test_picker_popup_flips_above_when_no_room() {
        let catalog = Catalog::builtin();
        let mut picker = SelectorState::from_items(&catalog.banks, false);
        picker.open();

        let trigger = Rect::new(12, 18, 56, 3);
        let popup = calculate_picker_popup(trigger, &picker, terminal());

        assert_eq!(popup.area.height, 9);
        assert_eq!(popup.area.bottom(), trigger.y);
        assert!(popup.search.is_none());
    }

    #[test]
    fn test_picker_row_hit_testing() {
        let catalog = Catalog::builtin();
        let mut picker = SelectorState::from_items(&catalog.wallets, false);
        picker.open();

        let popup = calculate_picker_popup(Rect::new(12, 5, 56, 3), &picker, terminal());
        assert_eq!(popup.row_at(popup.rows.x, popup.rows.y), Some(0));
        assert_eq!(popup.row_at(popup.rows.x + 3, popup.rows.y + 2), Some(2));
        assert_eq!(popup.row_at(popup.area.x, popup.area.y), None);
        assert!(popup.contains(popup.area.x, popup.area.y));
    }

    #[test]
    fn test_list_offset_keeps_highlight_visible() {
        assert_eq!(list_offset(0, 7), 0);
        assert_eq!(list_offset(6, 7), 0);
        assert_eq!(list_offset(9, 7), 3);
        assert_eq!(list_offset(3, 0), 0);
    }
}
