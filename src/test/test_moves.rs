mod test {
    use Direction::*;
    use crate::core::*;
    use crate::test::test_util::LevelTestState;

    #[test]
    fn when_move_into_empty_actor_moves() {
        let mut game = LevelTestState::from_grid(5, "#H.#");
        let change = game.assert_move(Right);

        game.assert_matches("#.H#");
        assert_eq!(change, GameChangeType::PlayerMove);
        assert_eq!(game.level.moves_left, 4);
        assert_eq!(game.level.helltaker, Vec2 { i: 0, j: 2 });
    }

    #[test]
    fn when_move_into_wall_is_illegal() {
        let mut game = LevelTestState::from_grid(5, "#H#");
        assert_eq!(game.assert_illegal(Right), IllegalMove::Wall);
        game.assert_matches("#H#");
        assert_eq!(game.level.moves_left, 5);
    }

    #[test]
    fn when_move_into_girl_is_illegal() {
        let mut game = LevelTestState::from_grid(5, "#HG#");
        assert_eq!(game.assert_illegal(Right), IllegalMove::Girl);
    }

    #[test]
    fn when_rock_pushed_into_empty_rock_slides() {
        let mut game = LevelTestState::from_grid(5, "#HR.#");
        let change = game.assert_move(Right);

        // The actor never advances on a push.
        game.assert_matches("#H.R#");
        assert_eq!(change, GameChangeType::Push);
        assert_eq!(game.level.helltaker, Vec2 { i: 0, j: 1 });
    }

    #[test]
    fn when_rock_push_blocked_by_wall_is_illegal() {
        let mut game = LevelTestState::from_grid(5, "#HR#");
        assert_eq!(game.assert_illegal(Right), IllegalMove::BlockedPush);
    }

    #[test]
    fn when_rock_push_blocked_by_rock_is_illegal() {
        let mut game = LevelTestState::from_grid(5, "#HRR.#");
        assert_eq!(game.assert_illegal(Right), IllegalMove::BlockedPush);
        game.assert_matches("#HRR.#");
    }

    #[test]
    fn when_rock_pushed_onto_key_it_covers_the_key() {
        let mut game = LevelTestState::from_grid(5, "#HRK#");
        game.assert_move(Right);

        game.assert_matches("#H.Y#");
        assert!(!game.level.has_key);
    }

    #[test]
    fn when_key_picked_up_lock_opens() {
        let mut game = LevelTestState::from_grid(9, "#HKL.#");

        game.assert_move(Right);
        assert!(game.level.has_key);
        game.assert_matches("#.HL.#");

        // The lock is consumed into floor once passed.
        game.assert_move(Right);
        game.assert_matches("#..H.#");
        game.assert_move(Right);
        game.assert_matches("#...H#");
    }

    #[test]
    fn when_lock_without_key_is_illegal() {
        let mut game = LevelTestState::from_grid(5, "#HL.#");
        assert_eq!(game.assert_illegal(Right), IllegalMove::Locked);
    }

    #[test]
    fn when_undead_pushed_into_empty_it_slides() {
        let mut game = LevelTestState::from_grid(5, "#HU.#");
        let change = game.assert_move(Right);

        game.assert_matches("#H.U#");
        assert_eq!(change, GameChangeType::Push);
    }

    #[test]
    fn when_undead_push_blocked_by_wall_it_is_crushed() {
        let mut game = LevelTestState::from_grid(5, "#HU#");
        let change = game.assert_move(Right);

        game.assert_matches("#H.#");
        assert_eq!(change, GameChangeType::Crush);
    }

    #[test]
    fn when_undead_push_blocked_by_rock_it_is_crushed() {
        let mut game = LevelTestState::from_grid(5, "#HUR.#");
        let change = game.assert_move(Right);

        game.assert_matches("#H.R.#");
        assert_eq!(change, GameChangeType::Crush);
    }

    #[test]
    fn when_code_rock_pushed_code_is_revealed_in_place() {
        let mut game = LevelTestState::from_grid(5, "#HC.#");
        let change = game.assert_move(Right);

        game.assert_matches("#HDR#");
        assert_eq!(change, GameChangeType::Push);
        assert!(!game.level.has_code);

        game.assert_move(Right);
        game.assert_matches("#.HR#");
        assert!(game.level.has_code);
    }

    #[test]
    fn when_code_rock_push_blocked_is_illegal() {
        let mut game = LevelTestState::from_grid(5, "#HC#");
        assert_eq!(game.assert_illegal(Right), IllegalMove::BlockedPush);

        let mut game = LevelTestState::from_grid(5, "#HCR.#");
        assert_eq!(game.assert_illegal(Right), IllegalMove::BlockedPush);
    }

    #[test]
    fn when_key_rock_pushed_key_is_revealed() {
        let mut game = LevelTestState::from_grid(5, "#HY.#");
        game.assert_move(Right);

        game.assert_matches("#HKR#");
        assert!(!game.level.has_key);

        game.assert_move(Right);
        game.assert_matches("#.HR#");
        assert!(game.level.has_key);
    }

    #[test]
    fn when_key_rock_push_blocked_is_illegal() {
        let mut game = LevelTestState::from_grid(5, "#HY#");
        assert_eq!(game.assert_illegal(Right), IllegalMove::BlockedPush);
    }

    #[test]
    fn when_budget_exhausted_moves_are_illegal() {
        let mut game = LevelTestState::from_grid(1, "#H..#");
        game.assert_move(Right);
        assert_eq!(game.level.moves_left, 0);

        let update = game.try_move(Right);
        assert!(matches!(
            update,
            GameUpdate::Illegal(IllegalMove::Terminal)
        ));
        game.assert_matches("#.H.#");
    }

    #[test]
    fn when_goal_already_satisfied_moves_are_illegal() {
        let game_text = "
3

grid
#H.#

spikes
....

objectives
.O..
";
        let mut game = LevelTestState::new(game_text);
        assert!(game.level.is_goal());
        assert_eq!(game.assert_illegal(Right), IllegalMove::Terminal);
    }

    #[test]
    fn every_legal_move_decreases_moves_and_keeps_one_actor() {
        let mut game = LevelTestState::from_grid(10, "#H.R..#");
        for direction in [Right, Right, Right, Left] {
            let before = game.level.moves_left;
            game.assert_move(direction);
            assert!(game.level.moves_left < before);

            let actors = game
                .level
                .grid
                .iter()
                .flatten()
                .filter(|&&c| c == Cell::Helltaker)
                .count();
            assert_eq!(actors, 1);
            assert_eq!(game.level.cell(game.level.helltaker), Cell::Helltaker);
        }
    }

    #[test]
    fn when_boards_and_flags_equal_states_are_equal() {
        let room = "
#####
#...#
#.H.#
#...#
#####
";
        let mut via_right = LevelTestState::from_grid(10, room);
        via_right.assert_moves(&[Right, Left]);
        let mut via_left = LevelTestState::from_grid(10, room);
        via_left.assert_moves(&[Left, Right]);

        assert_eq!(via_right.level, via_left.level);
        assert_eq!(via_right.level.is_goal(), via_left.level.is_goal());

        let mut set = std::collections::HashSet::new();
        set.insert(via_right.level.clone());
        set.insert(via_left.level.clone());
        assert_eq!(set.len(), 1);
    }
}
