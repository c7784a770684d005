mod test_public_room_echo;
