use crate::actor_framework::Entity;
use crate::domain::{Beer, BeerId};

impl Entity for Beer {
    type Id = BeerId;

    fn id(&self) -> Option<&BeerId> {
        self.id.as_ref()
    }

    fn assign_id(&mut self, id: BeerId) {
        self.id = Some(id);
    }
}
