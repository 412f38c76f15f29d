use anyhow::Result;
use linked_chain::data_structure::linked_list::LinkedList;

fn main() -> Result<()> {
    let nums = [1, 2, 3, 4, 5];
    let list = LinkedList::from_slice(&nums)?;

    if let Some(tail) = list.tail() {
        print!("{}", tail.value());
    }

    Ok(())
}
