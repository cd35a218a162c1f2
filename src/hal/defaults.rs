use super::types::{NameTemplate, PortGroup, PortNameTable};

/// Give every still unnamed port of `group` a generated name
pub fn fill_default_names(table: &mut PortNameTable, group: PortGroup, template: &NameTemplate) {
    for position in 1..=group.size {
        let index = group.offset + position - 1;
        if !table.is_filled(index) {
            table.fill(index, template.render(position));
        }
    }
}
