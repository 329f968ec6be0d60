// Minimal game engine API boundary. This trait exposes the heads-up actions
// and queries so front ends (CLIs, bots, UIs) can drive a table without
// depending on the concrete machine. It is implemented for the core `Game`
// type.

pub trait GameEngine {
    // Hand lifecycle
    fn start_hand(&mut self) -> Result<(), crate::state::ActionError>;
    fn reset_chips(&mut self);

    // Player actions
    fn action_fold(&mut self) -> Result<(), crate::state::ActionError>;
    fn action_check(&mut self) -> Result<(), crate::state::ActionError>;
    fn action_call(&mut self) -> Result<(), crate::state::ActionError>;
    fn action_raise_to(&mut self, amount: u64) -> Result<(), crate::state::ActionError>;

    // Queries
    fn to_call(&self, seat: usize) -> u64;
    fn current_bet(&self) -> u64;
    fn pot(&self) -> u64;
    fn hole_cards(&self, seat: usize) -> Option<crate::hand::HoleCards>;
    fn board(&self) -> &crate::hand::Board;
    fn stack(&self, seat: usize) -> u64;
    fn bet(&self, seat: usize) -> u64;
    fn turn(&self) -> usize;
    fn dealer(&self) -> usize;
    fn stage(&self) -> crate::state::Stage;
    fn hand_active(&self) -> bool;
    fn view(&self, seat: usize) -> crate::state::PlayerView;
    fn winner_message(&self) -> Option<String>;
}

impl GameEngine for crate::game::Game {
    fn start_hand(&mut self) -> Result<(), crate::state::ActionError> {
        self.start_hand()
    }

    fn reset_chips(&mut self) {
        self.reset_chips();
    }

    fn action_fold(&mut self) -> Result<(), crate::state::ActionError> {
        self.apply(crate::state::Action::Fold)
    }

    fn action_check(&mut self) -> Result<(), crate::state::ActionError> {
        self.apply(crate::state::Action::Check)
    }

    fn action_call(&mut self) -> Result<(), crate::state::ActionError> {
        self.apply(crate::state::Action::Call)
    }

    fn action_raise_to(&mut self, amount: u64) -> Result<(), crate::state::ActionError> {
        self.apply(crate::state::Action::Raise { to: amount })
    }

    fn to_call(&self, seat: usize) -> u64 {
        self.state().to_call(seat)
    }

    fn current_bet(&self) -> u64 {
        self.state().current_bet()
    }

    fn pot(&self) -> u64 {
        self.state().pot()
    }

    fn hole_cards(&self, seat: usize) -> Option<crate::hand::HoleCards> {
        self.state().player(seat).hole()
    }

    fn board(&self) -> &crate::hand::Board {
        self.state().board()
    }

    fn stack(&self, seat: usize) -> u64 {
        self.state().player(seat).chips()
    }

    fn bet(&self, seat: usize) -> u64 {
        self.state().player(seat).bet()
    }

    fn turn(&self) -> usize {
        self.state().turn()
    }

    fn dealer(&self) -> usize {
        self.state().dealer()
    }

    fn stage(&self) -> crate::state::Stage {
        self.state().stage()
    }

    fn hand_active(&self) -> bool {
        self.state().hand_active()
    }

    fn view(&self, seat: usize) -> crate::state::PlayerView {
        self.state().view(seat)
    }

    fn winner_message(&self) -> Option<String> {
        self.state().winner_message()
    }
}
