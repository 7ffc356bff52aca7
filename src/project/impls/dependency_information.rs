use crate::project::structs::dependency_information::DependencyInformation;

impl DependencyInformation {
    pub fn new(values: Vec<String>) -> DependencyInformation
    {
        DependencyInformation {
            id: Self::compute_id(&values),
            count: values.len(),
            values,
        }
    }

    fn compute_id(values: &[String]) -> String
    {
        if values.is_empty() {
            return String::from("_none");
        }
        let mut sorted = values.to_vec();
        sorted.sort();
        sorted.join(" ")
    }
}
