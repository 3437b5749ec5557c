use crate::Cost;

/// Inserts `element` into a Vec that is sorted by descending Cost, so that the cheapest element
/// is always at the end and can be taken with `pop`.
///
/// Elements of equal Cost are popped in the order they were inserted.
pub fn ordered_insert<T, F>(vector: &mut Vec<T>, element: T, get_value: F)
where
	F: Fn(&T) -> Cost,
{
	let value = get_value(&element);
	for i in 0..vector.len() {
		if get_value(&vector[i]) <= value {
			vector.insert(i, element);
			return;
		}
	}
	vector.push(element);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pops_cheapest_first() {
		let mut list = vec![];
		for (name, cost) in [('a', 3.0), ('b', 1.0), ('c', 2.0)] {
			ordered_insert(&mut list, (name, cost), |&(_, cost)| cost);
		}
		let order: Vec<char> = std::iter::from_fn(|| list.pop()).map(|(name, _)| name).collect();
		assert_eq!(order, vec!['b', 'c', 'a']);
	}

	#[test]
	fn ties_are_first_in_first_out() {
		let mut list = vec![];
		for name in ['a', 'b', 'c'] {
			ordered_insert(&mut list, (name, 1.0), |&(_, cost)| cost);
		}
		ordered_insert(&mut list, ('z', 0.5), |&(_, cost)| cost);
		let order: Vec<char> = std::iter::from_fn(|| list.pop()).map(|(name, _)| name).collect();
		assert_eq!(order, vec!['z', 'a', 'b', 'c']);
	}
}
