//! Order-entry form.
//!
//! Field values are kept as the raw text the user entered, the same way a
//! form control would hold them. Parsing happens once, in
//! [`OrderForm::gather`], and a value that does not parse is forwarded as
//! missing so the backend can reject it.

use crate::error::FormError;
use crate::model::{OrderRequest, OrderSide, OrderType};
use crate::render::SelectOption;

pub const SUBMIT_LABEL: &str = "Execute Order";
pub const SUBMITTING_LABEL: &str = "Executing...";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FormField {
    Account,
    Symbol,
    Type,
    Side,
    Quantity,
    LimitPrice,
}

impl FormField {
    const ORDER: [FormField; 6] = [
        FormField::Account,
        FormField::Symbol,
        FormField::Type,
        FormField::Side,
        FormField::Quantity,
        FormField::LimitPrice,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Account => "Account",
            FormField::Symbol => "Symbol",
            FormField::Type => "Order Type",
            FormField::Side => "Side",
            FormField::Quantity => "Quantity",
            FormField::LimitPrice => "Limit Price",
        }
    }

    /// Fields edited by typing, as opposed to cycling through choices.
    pub fn is_text(self) -> bool {
        matches!(self, FormField::Symbol | FormField::Quantity | FormField::LimitPrice)
    }
}

/// Visibility and required-ness of a conditional input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub visible: bool,
    pub required: bool,
}

impl FieldState {
    /// The limit-price input is only shown, and only required, for LIMIT.
    pub fn limit_price_for(order_type: OrderType) -> Self {
        match order_type {
            OrderType::Market => FieldState { visible: false, required: false },
            OrderType::Limit => FieldState { visible: true, required: true },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderForm {
    account_id: String,
    symbol: String,
    order_type: OrderType,
    side: OrderSide,
    quantity: String,
    limit_price: String,
    limit_price_field: FieldState,
    focus: FormField,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderForm {
    pub fn new() -> Self {
        let order_type = OrderType::default();
        Self {
            account_id: String::new(),
            symbol: String::new(),
            order_type,
            side: OrderSide::default(),
            quantity: String::new(),
            limit_price: String::new(),
            limit_price_field: FieldState::limit_price_for(order_type),
            focus: FormField::Account,
        }
    }

    /// Back to the defaults: no account, MARKET, BUY, empty inputs.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn side(&self) -> OrderSide {
        self.side
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn limit_price(&self) -> &str {
        &self.limit_price
    }

    pub fn limit_price_field(&self) -> FieldState {
        self.limit_price_field
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    // --- order type ---

    pub fn set_order_type(&mut self, order_type: OrderType) {
        self.order_type = order_type;
        self.limit_price_field = FieldState::limit_price_for(order_type);
        if !self.limit_price_field.visible && self.focus == FormField::LimitPrice {
            self.focus = FormField::Quantity;
        }
    }

    pub fn toggle_order_type(&mut self) {
        self.set_order_type(self.order_type.toggled());
    }

    pub fn set_side(&mut self, side: OrderSide) {
        self.side = side;
    }

    pub fn toggle_side(&mut self) {
        self.side = self.side.toggled();
    }

    // --- account dropdown ---

    pub fn select_account(&mut self, value: &str) {
        self.account_id = value.to_string();
    }

    /// Step through the dropdown entries (placeholder included), wrapping.
    pub fn cycle_account(&mut self, options: &[SelectOption], forward: bool) {
        if options.is_empty() {
            return;
        }
        let current = options
            .iter()
            .position(|opt| opt.value == self.account_id)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % options.len()
        } else {
            (current + options.len() - 1) % options.len()
        };
        self.account_id = options[next].value.clone();
    }

    /// Called after the dropdown is rebuilt: a selection that no longer
    /// exists falls back to the placeholder.
    pub fn retain_account(&mut self, options: &[SelectOption]) {
        if !options.iter().any(|opt| opt.value == self.account_id) {
            self.account_id.clear();
        }
    }

    // --- text inputs ---

    pub fn set_symbol(&mut self, symbol: &str) {
        self.symbol = symbol.to_string();
    }

    pub fn set_quantity(&mut self, quantity: &str) {
        self.quantity = quantity.to_string();
    }

    pub fn set_limit_price(&mut self, limit_price: &str) {
        self.limit_price = limit_price.to_string();
    }

    /// Append to the focused text input. Choice fields ignore typing.
    pub fn enter_char(&mut self, c: char) {
        if let Some(buf) = self.focused_text_mut() {
            buf.push(c);
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(buf) = self.focused_text_mut() {
            buf.pop();
        }
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Symbol => Some(&mut self.symbol),
            FormField::Quantity => Some(&mut self.quantity),
            FormField::LimitPrice => Some(&mut self.limit_price),
            FormField::Account | FormField::Type | FormField::Side => None,
        }
    }

    // --- focus ---

    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.move_focus(FormField::ORDER.len() - 1);
    }

    fn move_focus(&mut self, step: usize) {
        let len = FormField::ORDER.len();
        let mut idx = FormField::ORDER
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);
        loop {
            idx = (idx + step) % len;
            let field = FormField::ORDER[idx];
            if field != FormField::LimitPrice || self.limit_price_field.visible {
                self.focus = field;
                return;
            }
        }
    }

    // --- submission ---

    /// Required-ness check, the only validation done before submitting.
    /// Like a native `required` attribute, only an empty value is missing;
    /// anything else, blanks included, goes to the backend.
    pub fn check_required(&self) -> Result<(), FormError> {
        if self.account_id.is_empty() {
            return Err(FormError::MissingField(FormField::Account));
        }
        if self.symbol.is_empty() {
            return Err(FormError::MissingField(FormField::Symbol));
        }
        if self.quantity.is_empty() {
            return Err(FormError::MissingField(FormField::Quantity));
        }
        if self.limit_price_field.required && self.limit_price.is_empty() {
            return Err(FormError::MissingField(FormField::LimitPrice));
        }
        Ok(())
    }

    /// Build the request body from the current field values.
    pub fn gather(&self) -> OrderRequest {
        let limit_price = match self.order_type {
            OrderType::Limit => self.limit_price.trim().parse::<f64>().ok(),
            OrderType::Market => None,
        };

        OrderRequest {
            account_id: self.account_id.trim().parse::<i64>().ok(),
            symbol: self.symbol.to_uppercase(),
            order_type: self.order_type,
            side: self.side,
            quantity: self.quantity.trim().parse::<i64>().ok(),
            limit_price,
        }
    }
}

/// The form's submit control. Disabled while a request is in flight, which
/// is the only guard against double submission.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    disabled: bool,
}

impl SubmitButton {
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn label(&self) -> &'static str {
        if self.disabled {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Returns `false` if the button was already disabled.
    pub fn disable(&mut self) -> bool {
        !std::mem::replace(&mut self.disabled, true)
    }

    pub fn enable(&mut self) {
        self.disabled = false;
    }

    /// Re-enables the button when the returned guard is dropped, including
    /// during a panic unwind.
    pub fn enable_on_drop(&mut self) -> EnableOnDrop<'_> {
        EnableOnDrop(self)
    }
}

pub struct EnableOnDrop<'a>(&'a mut SubmitButton);

impl Drop for EnableOnDrop<'_> {
    fn drop(&mut self) {
        self.0.enable();
    }
}
