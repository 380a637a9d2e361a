use fleetgrid::{
    board::{
        AttackOutcome, CannotPlaceReason, CellState, Coordinate, Mark, OwnFleetGrid,
        TargetingGrid,
    },
    game::{Game, Player, TurnOutcome},
    ships::Ship,
};

fn c(text: &str) -> Coordinate {
    text.parse().unwrap()
}

#[test]
fn carrier_sinks_on_its_fifth_hit() {
    let mut fleet = OwnFleetGrid::new();
    fleet.place_vessel(5, c("A0"), c("A4")).unwrap();
    let mut targets = TargetingGrid::new();

    for text in &["A0", "A1", "A2", "A3"] {
        assert_eq!(targets.attack(c(text), &mut fleet), Ok(AttackOutcome::Hit));
        assert!(!fleet.get_vessel(c(text)).unwrap().is_sunk());
    }
    assert_eq!(targets.attack(c("A4"), &mut fleet), Ok(AttackOutcome::Sunk));
    assert!(fleet.get_vessel(c("A4")).unwrap().is_sunk());
    assert!(fleet.all_sunk());
}

#[test]
fn vessel_through_an_occupied_cell_is_refused() {
    let mut fleet = OwnFleetGrid::new();
    fleet.place_vessel(3, c("B0"), c("D0")).unwrap();
    let before = fleet.clone();

    let err = fleet.place_vessel(3, c("C0"), c("C2")).unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::AlreadyOccupied);
    let err = fleet.place_vessel(5, c("A0"), c("E0")).unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::AlreadyOccupied);

    assert_eq!(fleet, before);
    assert_eq!(fleet.vessels().len(), 1);
}

#[test]
fn targeting_grid_renders_without_revealing_the_fleet() {
    let mut fleet = OwnFleetGrid::new();
    fleet.place_vessel(2, c("A0"), c("A1")).unwrap();
    let mut targets = TargetingGrid::new();
    targets.attack(c("A0"), &mut fleet).unwrap();
    targets.attack(c("B0"), &mut fleet).unwrap();

    let rendered: Vec<String> = targets
        .rows()
        .map(|row| row.map(Mark::display_char).collect())
        .collect();
    assert_eq!(rendered[0], "XOOOOOOOOO");
    assert_eq!(rendered[1], "-OOOOOOOOO");

    let own: Vec<String> = fleet
        .rows()
        .map(|row| row.map(CellState::display_char).collect())
        .collect();
    assert_eq!(own[0], "XO--------");
    assert_eq!(own[1], "----------");
}

#[test]
fn full_game_between_two_players() {
    let mut game = Game::new();
    let layout = [
        (Ship::Carrier, "A0", "E0"),
        (Ship::Battleship, "A2", "A5"),
        (Ship::Cruiser, "J7", "J9"),
        (Ship::Submarine, "F5", "H5"),
        (Ship::Destroyer, "D8", "D9"),
    ];
    for &player in Player::ALL {
        for &(ship, a, b) in &layout {
            game.place_ship(player, ship, c(a), c(b)).unwrap();
        }
    }
    game.start().unwrap();

    let misses: Vec<Coordinate> = Coordinate::all()
        .filter(|&coord| {
            game.contestant(Player::One).fleet().cell_state(coord) == CellState::Empty
        })
        .take(20)
        .collect();
    let hits: Vec<Coordinate> = layout
        .iter()
        .flat_map(|&(ship, a, b)| ship.shape().between(c(a), c(b)).unwrap())
        .collect();

    let mut last = None;
    for (i, &target) in hits.iter().enumerate() {
        assert_eq!(game.current(), Player::One);
        last = Some(game.attack(target).unwrap());
        if game.winner().is_some() {
            assert_eq!(i, hits.len() - 1);
            break;
        }
        assert_eq!(game.attack(misses[i]), Ok(TurnOutcome::Miss));
    }
    assert_eq!(last, Some(TurnOutcome::Victory(Ship::Destroyer)));
    assert_eq!(game.winner(), Some(Player::One));
    assert_eq!(game.contestant(Player::One).targets().shots_fired(), 17);
    assert_eq!(game.contestant(Player::Two).targets().shots_fired(), 16);
}

#[cfg(feature = "rng_gen")]
#[test]
fn random_fleets_can_be_started() {
    use rand::{rngs::StdRng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(42);
    let mut game = Game::new();
    game.place_ship(Player::One, Ship::Carrier, c("J0"), c("J4"))
        .unwrap();
    for &player in Player::ALL {
        game.place_remaining_random(player, &mut rng).unwrap();
        assert_eq!(game.pending_ships(player).count(), 0);
    }
    game.start().unwrap();
    assert_eq!(
        game.contestant(Player::One).ship_at(c("J2")),
        Some(Ship::Carrier)
    );
}
