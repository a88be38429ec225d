//! Concrete fintrack records and their form bindings

mod budget;
mod cash_flow;
mod category;
mod holding;
mod snapshot;
mod validate;

pub use budget::{Budget, BudgetField};
pub use cash_flow::{CashFlowEntry, CashFlowField, FlowDirection};
pub use category::{Category, CategoryField};
pub use holding::{Holding, HoldingField};
pub use snapshot::{Snapshot, SnapshotField};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{input_name, item_name_prefix, strip_field_key};
    use crate::traits::{FieldKey, FormEntity};

    fn field_names_read_back<E: FormEntity>() {
        let prefix = item_name_prefix(E::ITEM_NAME);
        for &field in E::Field::ALL {
            let name = input_name(&prefix, field.as_key());
            assert_eq!(
                E::Field::from_key(strip_field_key(&name, &prefix)),
                Some(field),
                "{name}"
            );
        }
    }

    #[test]
    fn every_rendered_input_name_decodes_to_its_field() {
        field_names_read_back::<Budget>();
        field_names_read_back::<CashFlowEntry>();
        field_names_read_back::<Category>();
        field_names_read_back::<Holding>();
        field_names_read_back::<Snapshot>();
    }

    #[test]
    fn prefixes() {
        assert_eq!(item_name_prefix(CashFlowEntry::ITEM_NAME), "cash-flow");
        assert_eq!(item_name_prefix(Budget::ITEM_NAME), "budget");
    }
}
