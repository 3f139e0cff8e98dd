//! Audit Address tab

use serde::Serialize;

use crate::controller::PageState;
use crate::logic::validate::is_valid_address;
use super::SubmitButton;

#[derive(Debug, Clone, Serialize)]
pub struct AddressView {
    pub contract_address: String,
    pub placeholder: &'static str,
    /// Live format hint; `None` while the field is empty
    pub address_valid: Option<bool>,
    pub submit: SubmitButton,
    pub note: &'static str,
}

impl AddressView {
    pub fn build(state: &PageState) -> Self {
        let address = &state.contract_address;

        Self {
            contract_address: address.clone(),
            placeholder: "0x...",
            address_valid: (!address.is_empty()).then(|| is_valid_address(address)),
            submit: SubmitButton::new(
                state,
                "Start AI Audit from Address",
                "Auditing Address... Please Wait",
                "submitAddress",
            ),
            note: "Note: Auditing by address typically involves fetching the deployed bytecode and, \
                   if available, verified source code from block explorers. The depth of analysis may vary.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_hint() {
        let mut state = PageState::default();
        assert_eq!(AddressView::build(&state).address_valid, None);

        state.contract_address = "0xBAD".to_string();
        assert_eq!(AddressView::build(&state).address_valid, Some(false));

        state.contract_address = "0x1234567890123456789012345678901234567890".to_string();
        let view = AddressView::build(&state);
        assert_eq!(view.address_valid, Some(true));
        assert_eq!(view.submit.label, "Start AI Audit from Address");
        assert!(!view.submit.disabled);
    }
}
